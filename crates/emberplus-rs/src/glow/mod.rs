// crates/emberplus-rs/src/glow/mod.rs

//! The Glow tree: a rooted forest of typed elements.
//!
//! Every element of a decoded Glow message is one variant of [`GlowElement`].
//! Elements are addressed either by a `number` relative to their parent or, for
//! the qualified variants, by an absolute [`Path`](crate::types::Path).
//!
//! Optional protocol fields are `Option`s: `None` means the field was absent
//! from the message, which is distinct from any default value. The same holds
//! for optional collections: `None` carries no information, `Some(vec![])` means
//! "zero entries".

pub mod command;
pub mod function;
pub mod matrix;
pub mod node;
pub mod parameter;
pub mod stream;
pub mod template;

pub use command::{Command, Invocation, InvocationResult};
pub use function::{Function, FunctionContents, QualifiedFunction, TupleItemDescription};
pub use matrix::{
    Connection, Label, Matrix, MatrixContents, ParametersLocation, QualifiedMatrix, Source, Target,
};
pub use node::{Node, NodeContents, QualifiedNode};
pub use parameter::{
    Parameter, ParameterContents, QualifiedParameter, StreamDescription, StringIntegerCollection,
    StringIntegerPair,
};
pub use stream::{StreamCollection, StreamEntry};
pub use template::{QualifiedTemplate, Template};

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One element of a Glow tree. Exactly one variant is active per element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlowElement {
    Command(Command),
    Node(Node),
    QualifiedNode(QualifiedNode),
    Parameter(Parameter),
    QualifiedParameter(QualifiedParameter),
    Matrix(Matrix),
    QualifiedMatrix(QualifiedMatrix),
    Function(Function),
    QualifiedFunction(QualifiedFunction),
    Template(Template),
    QualifiedTemplate(QualifiedTemplate),
    ElementCollection(ElementCollection),
    RootElementCollection(RootElementCollection),
    StreamCollection(StreamCollection),
    InvocationResult(InvocationResult),
    /// Reserved container kind with no defined content.
    SubContainer,
}

/// The tag of a [`GlowElement`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlowKind {
    Command,
    Node,
    QualifiedNode,
    Parameter,
    QualifiedParameter,
    Matrix,
    QualifiedMatrix,
    Function,
    QualifiedFunction,
    Template,
    QualifiedTemplate,
    ElementCollection,
    RootElementCollection,
    StreamCollection,
    InvocationResult,
    SubContainer,
}

impl GlowKind {
    pub fn name(self) -> &'static str {
        match self {
            GlowKind::Command => "Command",
            GlowKind::Node => "Node",
            GlowKind::QualifiedNode => "QualifiedNode",
            GlowKind::Parameter => "Parameter",
            GlowKind::QualifiedParameter => "QualifiedParameter",
            GlowKind::Matrix => "Matrix",
            GlowKind::QualifiedMatrix => "QualifiedMatrix",
            GlowKind::Function => "Function",
            GlowKind::QualifiedFunction => "QualifiedFunction",
            GlowKind::Template => "Template",
            GlowKind::QualifiedTemplate => "QualifiedTemplate",
            GlowKind::ElementCollection => "ElementCollection",
            GlowKind::RootElementCollection => "RootElementCollection",
            GlowKind::StreamCollection => "StreamCollection",
            GlowKind::InvocationResult => "InvocationResult",
            GlowKind::SubContainer => "SubContainer",
        }
    }
}

impl fmt::Display for GlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl GlowElement {
    /// Returns the tag of the active variant.
    pub fn kind(&self) -> GlowKind {
        match self {
            GlowElement::Command(_) => GlowKind::Command,
            GlowElement::Node(_) => GlowKind::Node,
            GlowElement::QualifiedNode(_) => GlowKind::QualifiedNode,
            GlowElement::Parameter(_) => GlowKind::Parameter,
            GlowElement::QualifiedParameter(_) => GlowKind::QualifiedParameter,
            GlowElement::Matrix(_) => GlowKind::Matrix,
            GlowElement::QualifiedMatrix(_) => GlowKind::QualifiedMatrix,
            GlowElement::Function(_) => GlowKind::Function,
            GlowElement::QualifiedFunction(_) => GlowKind::QualifiedFunction,
            GlowElement::Template(_) => GlowKind::Template,
            GlowElement::QualifiedTemplate(_) => GlowKind::QualifiedTemplate,
            GlowElement::ElementCollection(_) => GlowKind::ElementCollection,
            GlowElement::RootElementCollection(_) => GlowKind::RootElementCollection,
            GlowElement::StreamCollection(_) => GlowKind::StreamCollection,
            GlowElement::InvocationResult(_) => GlowKind::InvocationResult,
            GlowElement::SubContainer => GlowKind::SubContainer,
        }
    }
}

/// An ordered sequence of sibling elements, e.g. the children of a node.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementCollection {
    pub elements: Vec<GlowElement>,
}

impl ElementCollection {
    pub fn new(elements: Vec<GlowElement>) -> Self {
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<GlowElement> for ElementCollection {
    fn from_iter<I: IntoIterator<Item = GlowElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// The top-level collection of a Glow message.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RootElementCollection {
    pub elements: Vec<GlowElement>,
}

impl RootElementCollection {
    pub fn new(elements: Vec<GlowElement>) -> Self {
        Self { elements }
    }
}

// --- Conversions into GlowElement ---

macro_rules! impl_into_element {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for GlowElement {
                fn from(value: $variant) -> Self {
                    GlowElement::$variant(value)
                }
            }
        )+
    };
}

impl_into_element!(
    Command,
    Node,
    QualifiedNode,
    Parameter,
    QualifiedParameter,
    Matrix,
    QualifiedMatrix,
    Function,
    QualifiedFunction,
    Template,
    QualifiedTemplate,
    ElementCollection,
    RootElementCollection,
    StreamCollection,
    InvocationResult,
);
