// crates/emberplus-rs/src/glow/command.rs

//! Commands, function invocations and their results.

use crate::types::{CommandType, FieldFlags};
use crate::value::Value;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A request to invoke a function.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Invocation {
    pub invocation_id: Option<i32>,
    pub arguments: Option<Vec<Value>>,
}

/// A command sent to an element. `number` is usually one of [`CommandType`],
/// but any number decoded from the wire is kept as-is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    pub number: u32,
    pub dir_field_mask: Option<FieldFlags>,
    pub invocation: Option<Invocation>,
}

impl Command {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            dir_field_mask: None,
            invocation: None,
        }
    }

    /// A GetDirectory command with the given field mask.
    pub fn get_directory(dir_field_mask: Option<FieldFlags>) -> Self {
        Self {
            dir_field_mask,
            ..Self::new(CommandType::GetDirectory.code() as u32)
        }
    }

    /// An Invoke command carrying `invocation`.
    pub fn invoke(invocation: Invocation) -> Self {
        Self {
            invocation: Some(invocation),
            ..Self::new(CommandType::Invoke.code() as u32)
        }
    }

    /// Returns the well-known command type, if `number` names one.
    pub fn command_type(&self) -> Option<CommandType> {
        i32::try_from(self.number)
            .ok()
            .and_then(|code| CommandType::try_from(code).ok())
    }
}

/// The outcome of a function invocation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvocationResult {
    pub invocation_id: Option<i32>,
    pub success: Option<bool>,
    pub result: Option<Vec<Value>>,
}
