// crates/emberplus-rs/src/glow/function.rs

use super::ElementCollection;
use crate::types::{ParameterType, Path};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One typed item of a function's argument or result signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TupleItemDescription {
    pub parameter_type: ParameterType,
    pub name: Option<String>,
}

impl TupleItemDescription {
    pub fn new(parameter_type: ParameterType, name: Option<&str>) -> Self {
        Self {
            parameter_type,
            name: name.map(String::from),
        }
    }
}

/// Optional attributes of a function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionContents {
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub arguments: Option<Vec<TupleItemDescription>>,
    pub result: Option<Vec<TupleItemDescription>>,
}

impl FunctionContents {
    pub fn is_empty(&self) -> bool {
        self.identifier.is_none()
            && self.description.is_none()
            && self.arguments.is_none()
            && self.result.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    pub number: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: FunctionContents,
    pub children: Option<ElementCollection>,
}

impl Function {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            contents: FunctionContents::default(),
            children: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualifiedFunction {
    pub path: Path,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: FunctionContents,
    pub children: Option<ElementCollection>,
}

impl QualifiedFunction {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            contents: FunctionContents::default(),
            children: None,
        }
    }
}
