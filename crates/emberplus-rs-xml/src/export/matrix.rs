// crates/emberplus-rs-xml/src/export/matrix.rs

//! Matrix contents and the targets, sources and connections that follow them.

use super::Exporter;
use crate::error::ExportError;
use crate::format::{TYPE_INTEGER, TYPE_RELATIVE_OID, format_integer, format_path};
use crate::sink::XmlSink;
use emberplus_rs::glow::{
    Connection, ElementCollection, Label, MatrixContents, ParametersLocation, Source, Target,
};

impl<S: XmlSink + ?Sized> Exporter<'_, S> {
    pub(super) fn matrix_body(
        &mut self,
        contents: &MatrixContents,
        children: Option<&ElementCollection>,
        targets: Option<&[Target]>,
        sources: Option<&[Source]>,
        connections: Option<&[Connection]>,
    ) -> Result<(), ExportError> {
        if !contents.is_empty() {
            self.matrix_contents(contents)?;
        }
        self.children(children)?;

        if let Some(targets) = targets {
            self.signals("targets", "Target", targets.iter().map(|t| t.number))?;
        }
        if let Some(sources) = sources {
            self.signals("sources", "Source", sources.iter().map(|s| s.number))?;
        }
        if let Some(connections) = connections {
            self.sink.open_element("connections")?;
            for connection in connections {
                self.connection(connection)?;
            }
            self.sink.close_element()?;
        }
        Ok(())
    }

    fn matrix_contents(&mut self, contents: &MatrixContents) -> Result<(), ExportError> {
        self.sink.open_element("contents")?;
        self.optional_element("identifier", contents.identifier.as_deref(), String::from)?;
        self.optional_element("description", contents.description.as_deref(), String::from)?;
        self.optional_element("type", contents.matrix_type, |v| format_integer(v.code()))?;
        self.optional_element("addressingMode", contents.addressing_mode, |v| {
            format_integer(v.code())
        })?;
        self.optional_element("targetCount", contents.target_count, format_integer)?;
        self.optional_element("sourceCount", contents.source_count, format_integer)?;
        self.optional_element(
            "maximumTotalConnects",
            contents.maximum_total_connects,
            format_integer,
        )?;
        self.optional_element(
            "maximumConnectsPerTarget",
            contents.maximum_connects_per_target,
            format_integer,
        )?;

        if let Some(location) = &contents.parameters_location {
            self.sink.open_element("parametersLocation")?;
            match location {
                ParametersLocation::BasePath(path) => {
                    self.sink.write_attribute("type", TYPE_RELATIVE_OID)?;
                    self.sink.write_text(&format_path(path))?;
                }
                ParametersLocation::Inline(number) => {
                    self.sink.write_attribute("type", TYPE_INTEGER)?;
                    self.sink.write_text(&format_integer(*number))?;
                }
            }
            self.sink.close_element()?;
        }

        self.optional_element(
            "gainParameterNumber",
            contents.gain_parameter_number,
            format_integer,
        )?;

        if let Some(labels) = &contents.labels {
            self.labels(labels)?;
        }
        self.sink.close_element()
    }

    fn labels(&mut self, labels: &[Label]) -> Result<(), ExportError> {
        self.sink.open_element("labels")?;
        for label in labels {
            self.sink.open_element("Label")?;
            self.sink.write_attribute("basePath", &format_path(&label.base_path))?;
            self.sink.write_attribute("description", &label.description)?;
            self.sink.close_element()?;
        }
        self.sink.close_element()
    }

    /// Writes a `targets` or `sources` list: one numbered child per signal.
    fn signals(
        &mut self,
        list: &str,
        item: &str,
        numbers: impl Iterator<Item = u32>,
    ) -> Result<(), ExportError> {
        self.sink.open_element(list)?;
        for number in numbers {
            self.sink.open_element(item)?;
            self.sink.write_attribute("number", &format_integer(number))?;
            self.sink.close_element()?;
        }
        self.sink.close_element()
    }

    fn connection(&mut self, connection: &Connection) -> Result<(), ExportError> {
        self.sink.open_element("Connection")?;
        self.sink
            .write_attribute("target", &format_integer(connection.target))?;
        // `sources` is a dotted list here, not a list of elements.
        self.optional_element("sources", connection.sources.as_deref(), format_path)?;
        self.optional_element("operation", connection.operation, |v| {
            format_integer(v.code())
        })?;
        self.optional_element("disposition", connection.disposition, |v| {
            format_integer(v.code())
        })?;
        self.sink.close_element()
    }
}
