// crates/emberplus-rs/src/glow/node.rs

use super::ElementCollection;
use crate::types::Path;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional attributes of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeContents {
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub is_root: Option<bool>,
    pub is_online: Option<bool>,
}

impl NodeContents {
    /// Returns `true` if no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_none()
            && self.description.is_none()
            && self.is_root.is_none()
            && self.is_online.is_none()
    }
}

/// A node addressed relative to its parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub number: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: NodeContents,
    pub children: Option<ElementCollection>,
}

impl Node {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            contents: NodeContents::default(),
            children: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.contents.identifier = Some(identifier.into());
        self
    }

    pub fn with_children(mut self, children: ElementCollection) -> Self {
        self.children = Some(children);
        self
    }
}

/// A node addressed by its absolute path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualifiedNode {
    pub path: Path,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: NodeContents,
    pub children: Option<ElementCollection>,
}

impl QualifiedNode {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            contents: NodeContents::default(),
            children: None,
        }
    }
}
