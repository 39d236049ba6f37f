// crates/emberplus-rs-xml/src/options.rs

//! Settings that shape the produced document without changing its content.

/// Pretty-printing settings: each nesting level is indented by `width` copies of `character`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub character: u8,
    pub width: usize,
}

/// Options for exporting a Glow tree.
///
/// The defaults produce the canonical form: no XML declaration, no
/// indentation, and a single `"\n"` after the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Whitespace written after the root element closes.
    pub line_ending: String,
    /// Pretty-printing, if any. Only honoured by sinks that support it.
    pub indent: Option<Indent>,
    /// Write `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub xml_declaration: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            line_ending: "\n".into(),
            indent: None,
            xml_declaration: false,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Indents nested elements. Non-ASCII characters fall back to a space.
    pub fn with_indent(mut self, character: char, width: usize) -> Self {
        let character = u8::try_from(character)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(b' ');
        self.indent = Some(Indent { character, width });
        self
    }

    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical() {
        let options = ExportOptions::default();
        assert_eq!(options.line_ending, "\n");
        assert_eq!(options.indent, None);
        assert!(!options.xml_declaration);
    }

    #[test]
    fn test_builder_setters() {
        let options = ExportOptions::new()
            .with_line_ending("\r\n")
            .with_indent('\t', 1)
            .with_xml_declaration(true);
        assert_eq!(options.line_ending, "\r\n");
        assert_eq!(
            options.indent,
            Some(Indent {
                character: b'\t',
                width: 1
            })
        );
        assert!(options.xml_declaration);
    }

    #[test]
    fn test_non_ascii_indent_falls_back_to_space() {
        let options = ExportOptions::new().with_indent('é', 2);
        assert_eq!(options.indent.map(|i| i.character), Some(b' '));
    }
}
