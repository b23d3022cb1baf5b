//! Error types for the codepress library.

use std::io;
use thiserror::Error;

/// Result type alias for codepress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The render configuration is invalid.
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    /// Error assembling the PDF byte stream.
    #[error("PDF serialization error: {0}")]
    Serialize(String),

    /// Error parsing a JSON document.
    #[error("Document parsing error: {0}")]
    DocumentParse(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DocumentParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfig("font size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid render configuration: font size must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
