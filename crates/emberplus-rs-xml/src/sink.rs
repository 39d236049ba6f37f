// crates/emberplus-rs-xml/src/sink.rs

//! The writer interface the exporter drives, and its `quick-xml` implementation.

use crate::error::ExportError;
use crate::options::ExportOptions;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io::Write;

/// An ordered destination for XML write operations.
///
/// Implementations must preserve the order of the calls byte-for-byte and escape
/// reserved markup characters in text and attribute values.
pub trait XmlSink {
    /// Starts a new element. Attributes may follow until the first child or text.
    fn open_element(&mut self, name: &str) -> Result<(), ExportError>;

    /// Closes the most recently opened element.
    fn close_element(&mut self) -> Result<(), ExportError>;

    /// Adds an attribute to the element opened last.
    fn write_attribute(&mut self, name: &str, value: &str) -> Result<(), ExportError>;

    /// Writes escaped character data.
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;

    /// Writes whitespace verbatim.
    fn write_raw_whitespace(&mut self, whitespace: &str) -> Result<(), ExportError>;

    /// Writes `<name>text</name>`.
    fn write_element_string(&mut self, name: &str, text: &str) -> Result<(), ExportError> {
        self.open_element(name)?;
        self.write_text(text)?;
        self.close_element()
    }
}

/// An [`XmlSink`] writing through a `quick_xml::Writer`.
///
/// Start tags are held back until their first child, text or close so that
/// attributes can follow `open_element`. Elements without content are written
/// in the long form (`<targets></targets>`).
pub struct QuickXmlSink<W: Write> {
    writer: Writer<W>,
    open: Vec<String>,
    pending: Option<BytesStart<'static>>,
    indented: bool,
}

impl<W: Write> QuickXmlSink<W> {
    /// Creates a sink producing compact output.
    pub fn new(inner: W) -> Self {
        Self::from_writer(Writer::new(inner), false)
    }

    /// Creates a sink honouring the indentation settings of `options`.
    pub fn with_options(inner: W, options: &ExportOptions) -> Self {
        match options.indent {
            Some(indent) => Self::from_writer(
                Writer::new_with_indent(inner, indent.character, indent.width),
                true,
            ),
            None => Self::from_writer(Writer::new(inner), false),
        }
    }

    fn from_writer(writer: Writer<W>, indented: bool) -> Self {
        Self {
            writer,
            open: Vec::new(),
            pending: None,
            indented,
        }
    }

    /// Writes the XML declaration followed by `line_ending`.
    /// Must be called before the first element. An indenting sink breaks the
    /// line itself.
    pub fn write_declaration(&mut self, line_ending: &str) -> Result<(), ExportError> {
        if !self.open.is_empty() {
            return Err(ExportError::SinkState("declaration after the first element"));
        }
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if self.indented {
            return Ok(());
        }
        self.write_raw_whitespace(line_ending)
    }

    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Returns the underlying writer. Fails if elements are still open.
    pub fn finish(mut self) -> Result<W, ExportError> {
        if !self.open.is_empty() {
            return Err(ExportError::SinkState("elements left open"));
        }
        self.writer.get_mut().flush()?;
        Ok(self.writer.into_inner())
    }

    fn flush_pending(&mut self) -> Result<(), ExportError> {
        if let Some(start) = self.pending.take() {
            self.writer.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}

impl<W: Write> XmlSink for QuickXmlSink<W> {
    fn open_element(&mut self, name: &str) -> Result<(), ExportError> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_owned()));
        self.open.push(name.to_owned());
        Ok(())
    }

    fn close_element(&mut self) -> Result<(), ExportError> {
        let name = self
            .open
            .pop()
            .ok_or(ExportError::SinkState("close without a matching open"))?;
        self.flush_pending()?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> Result<(), ExportError> {
        let start = self
            .pending
            .as_mut()
            .ok_or(ExportError::SinkState("attribute outside of a start tag"))?;
        let value = escape_attribute(value);
        start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Borrowed(value.as_bytes()),
        });
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        if self.open.is_empty() {
            return Err(ExportError::SinkState("text outside of the root element"));
        }
        self.flush_pending()?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        Ok(())
    }

    fn write_raw_whitespace(&mut self, whitespace: &str) -> Result<(), ExportError> {
        if !whitespace
            .chars()
            .all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
        {
            return Err(ExportError::InvalidWhitespace(whitespace.to_owned()));
        }
        self.flush_pending()?;
        self.writer.get_mut().write_all(whitespace.as_bytes())?;
        Ok(())
    }
}

/// Escapes `<`, `>`, `&` and `"`, and writes `\n`, `\r` and `\t` as character
/// references so that attribute-value normalization keeps them.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if !escaped.contains(['"', '\n', '\r', '\t']) {
        return escaped;
    }
    let mut buffer = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '"' => buffer.push_str("&quot;"),
            '\n' => buffer.push_str("&#xA;"),
            '\r' => buffer.push_str("&#xD;"),
            '\t' => buffer.push_str("&#x9;"),
            c => buffer.push(c),
        }
    }
    Cow::Owned(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut QuickXmlSink<Vec<u8>>) -> Result<(), ExportError>) -> String {
        let mut sink = QuickXmlSink::new(Vec::new());
        f(&mut sink).unwrap();
        String::from_utf8(sink.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_attributes_follow_open() {
        let xml = render(|sink| {
            sink.open_element("Node")?;
            sink.write_attribute("number", "3")?;
            sink.write_element_string("identifier", "root")?;
            sink.close_element()
        });
        assert_eq!(xml, r#"<Node number="3"><identifier>root</identifier></Node>"#);
    }

    #[test]
    fn test_empty_element_uses_long_form() {
        let xml = render(|sink| {
            sink.open_element("targets")?;
            sink.close_element()
        });
        assert_eq!(xml, "<targets></targets>");
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let xml = render(|sink| {
            sink.open_element("Label")?;
            sink.write_attribute("description", "a<b&c")?;
            sink.write_text("x < y & z")?;
            sink.close_element()
        });
        assert_eq!(
            xml,
            r#"<Label description="a&lt;b&amp;c">x &lt; y &amp; z</Label>"#
        );
    }

    #[test]
    fn test_attribute_whitespace_survives_normalization() {
        let xml = render(|sink| {
            sink.open_element("Label")?;
            sink.write_attribute("description", "a\nb\tc\r\"d\"")?;
            sink.close_element()
        });
        assert_eq!(
            xml,
            r#"<Label description="a&#xA;b&#x9;c&#xD;&quot;d&quot;"></Label>"#
        );
    }

    #[test]
    fn test_text_keeps_quotes() {
        let xml = render(|sink| sink.write_element_string("identifier", "it's \"x\" > y"));
        assert_eq!(xml, "<identifier>it's \"x\" &gt; y</identifier>");
    }

    #[test]
    fn test_escape_attribute_borrows_plain_values() {
        assert!(matches!(escape_attribute("Primary"), Cow::Borrowed("Primary")));
        assert_eq!(escape_attribute("a&b's"), "a&amp;b's");
    }

    #[test]
    fn test_attribute_after_content_is_rejected() {
        let mut sink = QuickXmlSink::new(Vec::new());
        sink.open_element("Node").unwrap();
        sink.write_text("x").unwrap();
        assert!(matches!(
            sink.write_attribute("number", "1"),
            Err(ExportError::SinkState(_))
        ));
    }

    #[test]
    fn test_close_without_open_is_rejected() {
        let mut sink = QuickXmlSink::new(Vec::new());
        assert!(matches!(
            sink.close_element(),
            Err(ExportError::SinkState(_))
        ));
    }

    #[test]
    fn test_finish_with_open_elements_fails() {
        let mut sink = QuickXmlSink::new(Vec::new());
        sink.open_element("Node").unwrap();
        assert_eq!(sink.depth(), 1);
        assert!(matches!(sink.finish(), Err(ExportError::SinkState(_))));
    }

    #[test]
    fn test_raw_whitespace() {
        let xml = render(|sink| {
            sink.open_element("Root")?;
            sink.close_element()?;
            sink.write_raw_whitespace("\r\n")
        });
        assert_eq!(xml, "<Root></Root>\r\n");

        let mut sink = QuickXmlSink::new(Vec::new());
        assert!(matches!(
            sink.write_raw_whitespace(" x "),
            Err(ExportError::InvalidWhitespace(_))
        ));
    }

    #[test]
    fn test_declaration() {
        let xml = render(|sink| {
            sink.write_declaration("\n")?;
            sink.open_element("Root")?;
            sink.close_element()
        });
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Root></Root>");
    }
}
