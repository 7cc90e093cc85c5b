//! Error types for lexplain-pdf.

use thiserror::Error;

/// Result type for lexplain-pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// A page content stream could not be encoded.
    #[error("Content encoding error: {0}")]
    Encode(String),

    /// The document could not be serialized.
    #[error("Write error: {0}")]
    Write(String),

    /// Nothing to render.
    #[error("Document has no pages")]
    Empty,
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Write(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Write(err.to_string())
    }
}
