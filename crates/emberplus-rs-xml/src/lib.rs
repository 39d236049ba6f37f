// crates/emberplus-rs-xml/src/lib.rs

#![doc = "Exports Ember+ Glow trees to their canonical XML representation."]
#![doc = ""]
#![doc = "The XML form is used for diagnostics, logging and interchange with other"]
#![doc = "Ember+ implementations, so the element names, their order and the text"]
#![doc = "encoding of every value are fixed."]
#![doc = ""]
#![doc = "It provides:"]
#![doc = "- `export`: walks a tree into any `XmlSink`."]
#![doc = "- `export_to_string`: the same, into a `String` in canonical form."]
#![doc = "- `QuickXmlSink`: an `XmlSink` over any `std::io::Write`."]

// --- Crate Modules ---

mod error;
mod export;
pub mod format;
mod log;
mod options;
mod sink;

// --- Public API Re-exports ---

pub use error::ExportError;
pub use export::{
    ExportSummary, Skipped, element_name, export, export_to_string,
    export_to_string_with_options, export_to_writer, export_with_options,
};
pub use options::{ExportOptions, Indent};
pub use sink::{QuickXmlSink, XmlSink};
