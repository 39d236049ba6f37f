// crates/emberplus-rs-xml/src/export/mod.rs

//! Converts Glow trees into their canonical XML representation.
//!
//! The export is a single depth-first walk. Every element kind maps to one XML
//! element (see [`element_name`]); element collections are transparent. Optional
//! fields that are absent in the tree produce no output at all, and optional
//! collections are written (possibly empty) only when present.
//!
//! Values whose type has no XML name are left out of the document and recorded
//! in the returned [`ExportSummary`]; the walk always continues. Sink failures
//! abort the export and are returned to the caller.

mod function;
mod matrix;
mod value;

use crate::error::ExportError;
use crate::format::{format_bool, format_integer, format_path};
use crate::log::{ExportContext, my_debug, my_trace, my_warn};
use crate::options::ExportOptions;
use crate::sink::{QuickXmlSink, XmlSink};
use emberplus_rs::glow::{
    Command, ElementCollection, GlowElement, GlowKind, NodeContents, ParameterContents,
};
use emberplus_rs::{ParameterType, Path};
use std::io::Write;

/// A tree defect that was skipped instead of written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skipped {
    /// A value element (`value`, `default`, `streamValue`, `Value`) whose type has no XML name.
    Value {
        element: &'static str,
        parameter_type: ParameterType,
    },
    /// A `minimum` or `maximum` that is neither integer nor real.
    MinMax {
        element: &'static str,
        parameter_type: ParameterType,
    },
    /// The `type` of a tuple item description with no XML name.
    TupleItemType { parameter_type: ParameterType },
    /// A reserved `SubContainer` element.
    SubContainer,
}

/// What an export wrote, and what it had to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of tree elements written (collections excluded, `Root` wrappers included).
    pub elements: usize,
    /// Defects skipped during the walk, in document order.
    pub skipped: Vec<Skipped>,
}

/// Returns the XML element name of `kind`, or `None` for kinds that have no
/// element of their own (element collections and sub-containers).
pub fn element_name(kind: GlowKind) -> Option<&'static str> {
    match kind {
        GlowKind::Command => Some("Command"),
        GlowKind::Node => Some("Node"),
        GlowKind::QualifiedNode => Some("QualifiedNode"),
        GlowKind::Parameter => Some("Parameter"),
        GlowKind::QualifiedParameter => Some("QualifiedParameter"),
        GlowKind::Matrix => Some("Matrix"),
        GlowKind::QualifiedMatrix => Some("QualifiedMatrix"),
        GlowKind::Function => Some("Function"),
        GlowKind::QualifiedFunction => Some("QualifiedFunction"),
        GlowKind::Template => Some("Template"),
        GlowKind::QualifiedTemplate => Some("QualifiedTemplate"),
        GlowKind::RootElementCollection | GlowKind::StreamCollection | GlowKind::InvocationResult => {
            Some("Root")
        }
        GlowKind::ElementCollection | GlowKind::SubContainer => None,
    }
}

/// Exports the tree rooted at `root` into `sink`, followed by a `"\n"`.
///
/// # Errors
/// Returns the first error reported by `sink`; the document is then incomplete.
pub fn export<S: XmlSink + ?Sized>(
    root: &GlowElement,
    sink: &mut S,
) -> Result<ExportSummary, ExportError> {
    export_with_options(root, sink, &ExportOptions::default())
}

/// Like [`export`], writing `options.line_ending` after the root element.
pub fn export_with_options<S: XmlSink + ?Sized>(
    root: &GlowElement,
    sink: &mut S,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    my_debug!("Exporting Glow tree rooted at a {}", root.kind());

    let mut exporter = Exporter {
        sink,
        summary: ExportSummary::default(),
        depth: 0,
    };
    exporter.visit(root)?;
    exporter.sink.write_raw_whitespace(&options.line_ending)?;

    let summary = exporter.summary;
    my_debug!(
        "Export finished: {} elements written, {} skipped",
        summary.elements,
        summary.skipped.len()
    );
    Ok(summary)
}

/// Exports the tree into `writer`, honouring all of `options` (declaration,
/// indentation, line ending), and returns the writer.
pub fn export_to_writer<W: Write>(
    root: &GlowElement,
    writer: W,
    options: &ExportOptions,
) -> Result<(W, ExportSummary), ExportError> {
    let mut sink = QuickXmlSink::with_options(writer, options);
    if options.xml_declaration {
        sink.write_declaration(&options.line_ending)?;
    }
    let summary = export_with_options(root, &mut sink, options)?;
    Ok((sink.finish()?, summary))
}

/// Exports the tree to a `String` in canonical form.
pub fn export_to_string(root: &GlowElement) -> Result<String, ExportError> {
    export_to_string_with_options(root, &ExportOptions::default())
}

/// Exports the tree to a `String` using `options`.
pub fn export_to_string_with_options(
    root: &GlowElement,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    let (buffer, _) = export_to_writer(root, Vec::new(), options)?;
    Ok(String::from_utf8(buffer)?)
}

// --- Walk ---

/// How an element is addressed in its start tag.
enum Address<'a> {
    Number(u32),
    Path(&'a Path),
}

/// State of one export call. Nothing outlives the call.
struct Exporter<'s, S: XmlSink + ?Sized> {
    sink: &'s mut S,
    summary: ExportSummary,
    depth: usize,
}

impl<S: XmlSink + ?Sized> Exporter<'_, S> {
    fn visit(&mut self, element: &GlowElement) -> Result<(), ExportError> {
        let kind = element.kind();
        my_trace!(self.context(kind), "Visiting element");

        match element {
            GlowElement::Command(command) => self.command(command),
            GlowElement::Node(node) => {
                self.open("Node", Address::Number(node.number))?;
                self.node_body(&node.contents, node.children.as_ref())?;
                self.close()
            }
            GlowElement::QualifiedNode(node) => {
                self.open("QualifiedNode", Address::Path(&node.path))?;
                self.node_body(&node.contents, node.children.as_ref())?;
                self.close()
            }
            GlowElement::Parameter(parameter) => {
                self.open("Parameter", Address::Number(parameter.number))?;
                self.parameter_body(&parameter.contents, parameter.children.as_ref())?;
                self.close()
            }
            GlowElement::QualifiedParameter(parameter) => {
                self.open("QualifiedParameter", Address::Path(&parameter.path))?;
                self.parameter_body(&parameter.contents, parameter.children.as_ref())?;
                self.close()
            }
            GlowElement::Matrix(matrix) => {
                self.open("Matrix", Address::Number(matrix.number))?;
                self.matrix_body(
                    &matrix.contents,
                    matrix.children.as_ref(),
                    matrix.targets.as_deref(),
                    matrix.sources.as_deref(),
                    matrix.connections.as_deref(),
                )?;
                self.close()
            }
            GlowElement::QualifiedMatrix(matrix) => {
                self.open("QualifiedMatrix", Address::Path(&matrix.path))?;
                self.matrix_body(
                    &matrix.contents,
                    matrix.children.as_ref(),
                    matrix.targets.as_deref(),
                    matrix.sources.as_deref(),
                    matrix.connections.as_deref(),
                )?;
                self.close()
            }
            GlowElement::Function(function) => {
                self.open("Function", Address::Number(function.number))?;
                self.function_body(&function.contents, function.children.as_ref())?;
                self.close()
            }
            GlowElement::QualifiedFunction(function) => {
                self.open("QualifiedFunction", Address::Path(&function.path))?;
                self.function_body(&function.contents, function.children.as_ref())?;
                self.close()
            }
            GlowElement::Template(template) => self.template(
                "Template",
                Address::Number(template.number),
                template.description.as_deref(),
                template.element.as_deref(),
            ),
            GlowElement::QualifiedTemplate(template) => self.template(
                "QualifiedTemplate",
                Address::Path(&template.path),
                template.description.as_deref(),
                template.element.as_deref(),
            ),
            GlowElement::ElementCollection(collection) => self.elements(&collection.elements),
            GlowElement::RootElementCollection(collection) => {
                self.open_root("ElementCollection")?;
                self.elements(&collection.elements)?;
                self.close()
            }
            GlowElement::StreamCollection(collection) => {
                self.open_root("StreamCollection")?;
                for entry in &collection.entries {
                    self.sink.open_element("StreamEntry")?;
                    self.sink
                        .write_attribute("streamIdentifier", &format_integer(entry.stream_identifier))?;
                    self.value("streamValue", &entry.stream_value)?;
                    self.sink.close_element()?;
                }
                self.close()
            }
            GlowElement::InvocationResult(result) => {
                self.open_root("InvocationResult")?;
                if let Some(invocation_id) = result.invocation_id {
                    self.sink
                        .write_attribute("invocationId", &format_integer(invocation_id))?;
                }
                self.optional_element("success", result.success, |v| format_bool(v).into())?;
                self.value_list("result", result.result.as_deref())?;
                self.close()
            }
            GlowElement::SubContainer => {
                my_debug!(self.context(kind), "Reserved element kind, nothing written");
                self.summary.skipped.push(Skipped::SubContainer);
                Ok(())
            }
        }
    }

    fn elements(&mut self, elements: &[GlowElement]) -> Result<(), ExportError> {
        for element in elements {
            self.visit(element)?;
        }
        Ok(())
    }

    // --- Element framing ---

    fn open(&mut self, name: &str, address: Address<'_>) -> Result<(), ExportError> {
        self.sink.open_element(name)?;
        match address {
            Address::Number(number) => self.sink.write_attribute("number", &format_integer(number))?,
            Address::Path(path) => self.sink.write_attribute("path", &format_path(path))?,
        }
        self.summary.elements += 1;
        self.depth += 1;
        Ok(())
    }

    /// Opens a `Root` wrapper whose `type` names the message kind.
    fn open_root(&mut self, root_type: &str) -> Result<(), ExportError> {
        self.sink.open_element("Root")?;
        self.sink.write_attribute("type", root_type)?;
        self.summary.elements += 1;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), ExportError> {
        self.depth -= 1;
        self.sink.close_element()
    }

    fn context(&self, kind: GlowKind) -> ExportContext {
        ExportContext {
            kind,
            depth: self.depth,
        }
    }

    fn skip(&mut self, skipped: Skipped) {
        my_warn!(
            "Left out of the document at depth {}: {:?}",
            self.depth,
            skipped
        );
        self.summary.skipped.push(skipped);
    }

    // --- Shared building blocks ---

    /// Writes `<name>encode(value)</name>` if `value` is present.
    fn optional_element<T>(
        &mut self,
        name: &str,
        value: Option<T>,
        encode: impl FnOnce(T) -> String,
    ) -> Result<(), ExportError> {
        if let Some(value) = value {
            self.sink.write_element_string(name, &encode(value))?;
        }
        Ok(())
    }

    fn children(&mut self, children: Option<&ElementCollection>) -> Result<(), ExportError> {
        if let Some(children) = children {
            self.sink.open_element("children")?;
            self.elements(&children.elements)?;
            self.sink.close_element()?;
        }
        Ok(())
    }

    // --- Kinds ---

    fn command(&mut self, command: &Command) -> Result<(), ExportError> {
        self.open("Command", Address::Number(command.number))?;
        self.optional_element("dirFieldMask", command.dir_field_mask, |v| {
            format_integer(v.code())
        })?;

        if let Some(invocation) = &command.invocation {
            self.sink.open_element("invocation")?;
            self.optional_element("invocationId", invocation.invocation_id, format_integer)?;
            self.value_list("arguments", invocation.arguments.as_deref())?;
            self.sink.close_element()?;
        }

        self.close()
    }

    fn node_body(
        &mut self,
        contents: &NodeContents,
        children: Option<&ElementCollection>,
    ) -> Result<(), ExportError> {
        if !contents.is_empty() {
            self.sink.open_element("contents")?;
            self.optional_element("identifier", contents.identifier.as_deref(), String::from)?;
            self.optional_element("description", contents.description.as_deref(), String::from)?;
            self.optional_element("isRoot", contents.is_root, |v| format_bool(v).into())?;
            self.optional_element("isOnline", contents.is_online, |v| format_bool(v).into())?;
            self.sink.close_element()?;
        }
        self.children(children)
    }

    fn parameter_body(
        &mut self,
        contents: &ParameterContents,
        children: Option<&ElementCollection>,
    ) -> Result<(), ExportError> {
        if !contents.is_empty() {
            self.sink.open_element("contents")?;
            self.optional_element("identifier", contents.identifier.as_deref(), String::from)?;
            self.optional_element("description", contents.description.as_deref(), String::from)?;
            if let Some(value) = &contents.value {
                self.value("value", value)?;
            }
            if let Some(minimum) = &contents.minimum {
                self.min_max("minimum", minimum)?;
            }
            if let Some(maximum) = &contents.maximum {
                self.min_max("maximum", maximum)?;
            }
            if let Some(default) = &contents.default {
                self.value("default", default)?;
            }
            self.optional_element("enumeration", contents.enumeration.as_deref(), String::from)?;
            self.optional_element("factor", contents.factor, format_integer)?;
            self.optional_element("format", contents.format.as_deref(), String::from)?;
            self.optional_element("step", contents.step, format_integer)?;
            self.optional_element("access", contents.access, |v| format_integer(v.code()))?;
            self.optional_element("type", contents.parameter_type, |v| {
                format_integer(v.code())
            })?;
            self.optional_element("isOnline", contents.is_online, |v| format_bool(v).into())?;
            self.optional_element("streamIdentifier", contents.stream_identifier, format_integer)?;
            if let Some(enum_map) = &contents.enum_map {
                self.enum_map("enumMap", enum_map)?;
            }
            if let Some(stream_descriptor) = &contents.stream_descriptor {
                self.stream_description("streamDescriptor", stream_descriptor)?;
            }
            self.sink.close_element()?;
        }
        self.children(children)
    }

    fn template(
        &mut self,
        name: &str,
        address: Address<'_>,
        description: Option<&str>,
        element: Option<&GlowElement>,
    ) -> Result<(), ExportError> {
        self.open(name, address)?;
        if let Some(description) = description {
            self.sink.write_attribute("description", description)?;
        }
        if let Some(element) = element {
            self.sink.open_element("element")?;
            self.visit(element)?;
            self.sink.close_element()?;
        }
        self.close()
    }
}
