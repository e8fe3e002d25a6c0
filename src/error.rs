//! Error types for the unsheet library.

use std::io;
use thiserror::Error;

/// Result type alias for unsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading spreadsheet parts.
///
/// Each parsing step has a single failure outcome per part: the part could
/// not be read, or its XML could not be walked. Callers that want the
/// degrade-to-empty behavior substitute a default value on error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading a part from disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::XmlParse("unexpected EOF".to_string());
        assert_eq!(err.to_string(), "XML parse error: unexpected EOF");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
