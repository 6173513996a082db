//! Error types for I/O operations.
//!
//! Every codec and the data URI parser report through [`IoError`].

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed `data:` URI or invalid base64 payload.
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Format could not be detected or is not compiled in.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Decoded pixels did not form a valid image.
    #[error(transparent)]
    Core(#[from] epoxy_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
