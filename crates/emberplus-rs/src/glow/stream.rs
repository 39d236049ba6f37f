// crates/emberplus-rs/src/glow/stream.rs

use crate::value::Value;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The current value of one stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreamEntry {
    pub stream_identifier: i32,
    pub stream_value: Value,
}

/// A batch of stream entries, sent as its own Glow message.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreamCollection {
    pub entries: Vec<StreamEntry>,
}
