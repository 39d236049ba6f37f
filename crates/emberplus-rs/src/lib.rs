#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "In-memory model of Ember+ Glow trees."]
#![doc = ""]
#![doc = "A Glow tree is the decoded form of one Ember+ message: nodes, parameters,"]
#![doc = "matrices, functions, templates, commands, stream collections and invocation"]
#![doc = "results. This crate only models the tree; encoding it (for example to XML,"]
#![doc = "see `emberplus-rs-xml`) is done by companion crates."]

// 'alloc' is used for dynamic allocation (strings, collections, boxed elements)
extern crate alloc;

// --- Foundation Modules ---
pub mod types;
pub mod value;

// --- Glow Tree ---
pub mod glow;

// --- Top-level Exports ---
pub use glow::{ElementCollection, GlowElement, GlowKind, RootElementCollection};
pub use types::{InvalidCode, ParameterType, Path, PathError};
pub use value::{MinMax, Value};
