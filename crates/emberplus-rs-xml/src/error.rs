// crates/emberplus-rs-xml/src/error.rs

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

use quick_xml::Error as XmlError;

/// Errors that can occur while exporting a Glow tree.
///
/// Defects in the tree itself (values without a known XML type, reserved
/// element kinds) are not errors: they are skipped and reported in the
/// `ExportSummary`. Only failures of the output sink abort an export.
#[derive(Debug)]
pub enum ExportError {
    /// The underlying writer failed (e.g., I/O).
    Io(io::Error),

    /// An error from the underlying `quick-xml` writer.
    XmlWriting(XmlError),

    /// The produced document is not valid UTF-8.
    Utf8(FromUtf8Error),

    /// The sink was driven out of order (e.g., an attribute after element content,
    /// or a close without a matching open).
    SinkState(&'static str),

    /// `write_raw_whitespace` was called with text containing non-whitespace characters.
    InvalidWhitespace(String),
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<XmlError> for ExportError {
    fn from(e: XmlError) -> Self {
        ExportError::XmlWriting(e)
    }
}

impl From<FromUtf8Error> for ExportError {
    fn from(e: FromUtf8Error) -> Self {
        ExportError::Utf8(e)
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            ExportError::Utf8(e) => write!(f, "Output is not valid UTF-8: {}", e),
            ExportError::SinkState(msg) => write!(f, "Invalid sink state: {}", msg),
            ExportError::InvalidWhitespace(text) => {
                write!(f, "Raw whitespace contains non-whitespace characters: {:?}", text)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::XmlWriting(e) => Some(e),
            ExportError::Utf8(e) => Some(e),
            ExportError::SinkState(_) | ExportError::InvalidWhitespace(_) => None,
        }
    }
}
