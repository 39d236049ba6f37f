// crates/emberplus-rs/src/glow/matrix.rs

//! Matrices: crosspoint grids of targets and sources.

use super::ElementCollection;
use crate::types::{ConnectionDisposition, ConnectionOperation, MatrixAddressingMode, MatrixType, Path};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the per-target/per-source parameters of a matrix live.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParametersLocation {
    /// Absolute path of the node holding the parameters.
    BasePath(Path),
    /// Number of a child of the matrix holding the parameters.
    Inline(i32),
}

/// Names a node holding one label parameter per target and source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label {
    pub base_path: Path,
    pub description: String,
}

/// Optional attributes of a matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixContents {
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub matrix_type: Option<MatrixType>,
    pub addressing_mode: Option<MatrixAddressingMode>,
    pub target_count: Option<i32>,
    pub source_count: Option<i32>,
    pub maximum_total_connects: Option<i32>,
    pub maximum_connects_per_target: Option<i32>,
    pub parameters_location: Option<ParametersLocation>,
    pub gain_parameter_number: Option<i32>,
    pub labels: Option<Vec<Label>>,
}

impl MatrixContents {
    /// Returns `true` if no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_none()
            && self.description.is_none()
            && self.matrix_type.is_none()
            && self.addressing_mode.is_none()
            && self.target_count.is_none()
            && self.source_count.is_none()
            && self.maximum_total_connects.is_none()
            && self.maximum_connects_per_target.is_none()
            && self.parameters_location.is_none()
            && self.gain_parameter_number.is_none()
            && self.labels.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    pub number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Source {
    pub number: u32,
}

/// The state (or requested change) of one matrix target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Connection {
    pub target: u32,
    /// Source numbers connected to the target, in order.
    pub sources: Option<Vec<u32>>,
    pub operation: Option<ConnectionOperation>,
    pub disposition: Option<ConnectionDisposition>,
}

impl Connection {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            sources: None,
            operation: None,
            disposition: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<u32>) -> Self {
        self.sources = Some(sources);
        self
    }
}

/// A matrix addressed relative to its parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    pub number: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: MatrixContents,
    pub children: Option<ElementCollection>,
    pub targets: Option<Vec<Target>>,
    pub sources: Option<Vec<Source>>,
    pub connections: Option<Vec<Connection>>,
}

impl Matrix {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            contents: MatrixContents::default(),
            children: None,
            targets: None,
            sources: None,
            connections: None,
        }
    }
}

/// A matrix addressed by its absolute path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualifiedMatrix {
    pub path: Path,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: MatrixContents,
    pub children: Option<ElementCollection>,
    pub targets: Option<Vec<Target>>,
    pub sources: Option<Vec<Source>>,
    pub connections: Option<Vec<Connection>>,
}

impl QualifiedMatrix {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            contents: MatrixContents::default(),
            children: None,
            targets: None,
            sources: None,
            connections: None,
        }
    }
}
