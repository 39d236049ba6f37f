// crates/emberplus-rs/src/glow/template.rs

use super::GlowElement;
use crate::types::Path;
use alloc::boxed::Box;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reusable element description addressed relative to its parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    pub number: u32,
    pub description: Option<String>,
    pub element: Option<Box<GlowElement>>,
}

impl Template {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            description: None,
            element: None,
        }
    }

    pub fn with_element(mut self, element: impl Into<GlowElement>) -> Self {
        self.element = Some(Box::new(element.into()));
        self
    }
}

/// A template addressed by its absolute path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualifiedTemplate {
    pub path: Path,
    pub description: Option<String>,
    pub element: Option<Box<GlowElement>>,
}

impl QualifiedTemplate {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            description: None,
            element: None,
        }
    }
}
