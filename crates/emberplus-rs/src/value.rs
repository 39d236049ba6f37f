// crates/emberplus-rs/src/value.rs

//! Typed parameter values and parameter limits.

use crate::types::ParameterType;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parameter value, stream value or function argument/result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
    Boolean(bool),
    Octets(Vec<u8>),
    /// The explicit `null` value.
    Null,
    /// A value decoded with a type tag that carries no known payload.
    Unsupported(ParameterType),
}

impl Value {
    /// Returns the type tag of this value.
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            Value::Integer(_) => ParameterType::INTEGER,
            Value::Real(_) => ParameterType::REAL,
            Value::String(_) => ParameterType::STRING,
            Value::Boolean(_) => ParameterType::BOOLEAN,
            Value::Octets(_) => ParameterType::OCTETS,
            Value::Null => ParameterType::NULL,
            Value::Unsupported(parameter_type) => *parameter_type,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Octets(v)
    }
}

/// The minimum or maximum of a parameter. Only integer and real limits exist.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MinMax {
    Integer(i64),
    Real(f64),
    /// A limit decoded with any other type tag.
    Unsupported(ParameterType),
}

impl MinMax {
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            MinMax::Integer(_) => ParameterType::INTEGER,
            MinMax::Real(_) => ParameterType::REAL,
            MinMax::Unsupported(parameter_type) => *parameter_type,
        }
    }
}

impl From<i64> for MinMax {
    fn from(v: i64) -> Self {
        MinMax::Integer(v)
    }
}

impl From<f64> for MinMax {
    fn from(v: f64) -> Self {
        MinMax::Real(v)
    }
}
