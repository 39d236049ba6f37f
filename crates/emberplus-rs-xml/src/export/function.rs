// crates/emberplus-rs-xml/src/export/function.rs

use super::{Exporter, Skipped};
use crate::error::ExportError;
use crate::format::xml_type_name;
use crate::sink::XmlSink;
use emberplus_rs::glow::{ElementCollection, FunctionContents, TupleItemDescription};

impl<S: XmlSink + ?Sized> Exporter<'_, S> {
    pub(super) fn function_body(
        &mut self,
        contents: &FunctionContents,
        children: Option<&ElementCollection>,
    ) -> Result<(), ExportError> {
        if !contents.is_empty() {
            self.sink.open_element("contents")?;
            self.optional_element("identifier", contents.identifier.as_deref(), String::from)?;
            self.optional_element("description", contents.description.as_deref(), String::from)?;
            if let Some(arguments) = &contents.arguments {
                self.tuple("arguments", arguments)?;
            }
            if let Some(result) = &contents.result {
                self.tuple("result", result)?;
            }
            self.sink.close_element()?;
        }
        self.children(children)
    }

    fn tuple(&mut self, name: &str, items: &[TupleItemDescription]) -> Result<(), ExportError> {
        self.sink.open_element(name)?;
        for item in items {
            self.sink.open_element("TupleItemDescription")?;
            match xml_type_name(item.parameter_type) {
                Some(type_name) => self.sink.write_element_string("type", type_name)?,
                None => self.skip(Skipped::TupleItemType {
                    parameter_type: item.parameter_type,
                }),
            }
            self.optional_element("name", item.name.as_deref(), String::from)?;
            self.sink.close_element()?;
        }
        self.sink.close_element()
    }
}
