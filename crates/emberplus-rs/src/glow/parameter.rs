// crates/emberplus-rs/src/glow/parameter.rs

//! Parameters and their auxiliary descriptions (enumeration map, stream descriptor).

use super::ElementCollection;
use crate::types::{ParameterAccess, ParameterType, Path, StreamFormat};
use crate::value::{MinMax, Value};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One `(name, value)` entry of an enumeration map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringIntegerPair {
    pub entry_string: String,
    pub entry_integer: i32,
}

/// An enumeration map. Entry order is significant and preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringIntegerCollection {
    pub entries: Vec<StringIntegerPair>,
}

impl StringIntegerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, keeping insertion order.
    pub fn push(&mut self, entry_string: impl Into<String>, entry_integer: i32) {
        self.entries.push(StringIntegerPair {
            entry_string: entry_string.into(),
            entry_integer,
        });
    }
}

/// Describes where a parameter's value is located inside a stream entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreamDescription {
    pub format: StreamFormat,
    /// Byte offset of the value inside the stream entry's octets.
    pub offset: i32,
}

/// Optional attributes of a parameter.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterContents {
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub value: Option<Value>,
    pub minimum: Option<MinMax>,
    pub maximum: Option<MinMax>,
    pub default: Option<Value>,
    /// Legacy enumeration: entries separated by line feeds.
    pub enumeration: Option<String>,
    pub factor: Option<i32>,
    pub format: Option<String>,
    pub step: Option<i32>,
    pub access: Option<ParameterAccess>,
    pub parameter_type: Option<ParameterType>,
    pub is_online: Option<bool>,
    pub stream_identifier: Option<i32>,
    pub enum_map: Option<StringIntegerCollection>,
    pub stream_descriptor: Option<StreamDescription>,
}

impl ParameterContents {
    /// Returns `true` if no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_none()
            && self.description.is_none()
            && self.value.is_none()
            && self.minimum.is_none()
            && self.maximum.is_none()
            && self.default.is_none()
            && self.enumeration.is_none()
            && self.factor.is_none()
            && self.format.is_none()
            && self.step.is_none()
            && self.access.is_none()
            && self.parameter_type.is_none()
            && self.is_online.is_none()
            && self.stream_identifier.is_none()
            && self.enum_map.is_none()
            && self.stream_descriptor.is_none()
    }
}

/// A parameter addressed relative to its parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameter {
    pub number: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: ParameterContents,
    pub children: Option<ElementCollection>,
}

impl Parameter {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            contents: ParameterContents::default(),
            children: None,
        }
    }

    /// Sets the value together with the matching `type` attribute.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.contents.parameter_type = Some(value.parameter_type());
        self.contents.value = Some(value);
        self
    }
}

/// A parameter addressed by its absolute path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualifiedParameter {
    pub path: Path,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: ParameterContents,
    pub children: Option<ElementCollection>,
}

impl QualifiedParameter {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            contents: ParameterContents::default(),
            children: None,
        }
    }
}
