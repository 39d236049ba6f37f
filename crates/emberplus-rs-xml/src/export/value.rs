// crates/emberplus-rs-xml/src/export/value.rs

//! Typed value elements: `<name type="TYPE">TEXT</name>`.

use super::{Exporter, Skipped};
use crate::error::ExportError;
use crate::format::{
    TYPE_INTEGER, TYPE_REAL, format_bool, format_integer, format_octets, format_real,
    xml_type_name,
};
use crate::sink::XmlSink;
use emberplus_rs::glow::{StreamDescription, StringIntegerCollection};
use emberplus_rs::{MinMax, Value};

/// Text form of a value with a known XML type, `None` otherwise.
fn encode_value(value: &Value) -> Option<(&'static str, String)> {
    let text = match value {
        Value::Integer(v) => format_integer(*v),
        Value::Real(v) => format_real(*v),
        Value::String(v) => v.clone(),
        Value::Boolean(v) => format_bool(*v).into(),
        Value::Octets(v) => format_octets(v),
        Value::Null | Value::Unsupported(_) => return None,
    };
    // Only tags with a name reach this point.
    xml_type_name(value.parameter_type()).map(|name| (name, text))
}

fn encode_min_max(value: &MinMax) -> Option<(&'static str, String)> {
    match value {
        MinMax::Integer(v) => Some((TYPE_INTEGER, format_integer(*v))),
        MinMax::Real(v) => Some((TYPE_REAL, format_real(*v))),
        MinMax::Unsupported(_) => None,
    }
}

impl<S: XmlSink + ?Sized> Exporter<'_, S> {
    /// Writes `value` as element `name`, or records it as skipped.
    pub(super) fn value(&mut self, name: &'static str, value: &Value) -> Result<(), ExportError> {
        match encode_value(value) {
            Some((type_name, text)) => self.typed_element(name, type_name, &text),
            None => {
                self.skip(Skipped::Value {
                    element: name,
                    parameter_type: value.parameter_type(),
                });
                Ok(())
            }
        }
    }

    /// Writes a `minimum` or `maximum`. Only integer and real limits have an encoding.
    pub(super) fn min_max(&mut self, name: &'static str, value: &MinMax) -> Result<(), ExportError> {
        match encode_min_max(value) {
            Some((type_name, text)) => self.typed_element(name, type_name, &text),
            None => {
                self.skip(Skipped::MinMax {
                    element: name,
                    parameter_type: value.parameter_type(),
                });
                Ok(())
            }
        }
    }

    /// Writes `<name>` holding one `Value` element per item, if `values` is present.
    pub(super) fn value_list(
        &mut self,
        name: &str,
        values: Option<&[Value]>,
    ) -> Result<(), ExportError> {
        let Some(values) = values else {
            return Ok(());
        };
        self.sink.open_element(name)?;
        for value in values {
            self.value("Value", value)?;
        }
        self.sink.close_element()
    }

    pub(super) fn enum_map(
        &mut self,
        name: &str,
        map: &StringIntegerCollection,
    ) -> Result<(), ExportError> {
        self.sink.open_element(name)?;
        for pair in &map.entries {
            self.sink.open_element("StringIntegerPair")?;
            self.sink.write_attribute("entryString", &pair.entry_string)?;
            self.sink
                .write_attribute("entryInteger", &format_integer(pair.entry_integer))?;
            self.sink.close_element()?;
        }
        self.sink.close_element()
    }

    pub(super) fn stream_description(
        &mut self,
        name: &str,
        description: &StreamDescription,
    ) -> Result<(), ExportError> {
        self.sink.open_element(name)?;
        self.sink
            .write_element_string("format", &format_integer(description.format.code()))?;
        self.sink
            .write_element_string("offset", &format_integer(description.offset))?;
        self.sink.close_element()
    }

    fn typed_element(
        &mut self,
        name: &str,
        type_name: &str,
        text: &str,
    ) -> Result<(), ExportError> {
        self.sink.open_element(name)?;
        self.sink.write_attribute("type", type_name)?;
        self.sink.write_text(text)?;
        self.sink.close_element()
    }
}
