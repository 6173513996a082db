//! Error types for the visualizer.

use std::path::PathBuf;

use epoxy_io::IoError;
use thiserror::Error;

/// Result type for visualizer operations.
pub type Result<T> = std::result::Result<T, VisualizeError>;

/// Errors that can occur while rendering a preview.
///
/// Unknown style or scheme names are never errors; they resolve to the
/// default style or are ignored.
#[derive(Debug, Error)]
pub enum VisualizeError {
    /// The input could not be parsed or decoded as an image.
    #[error("image decode error: {0}")]
    ImageDecode(#[source] IoError),

    /// The result could not be encoded.
    #[error("image encode error: {0}")]
    Encode(#[source] IoError),

    /// Invalid configuration value.
    #[error("invalid config: {0}")]
    Config(String),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisualizeError {
    /// Returns `true` if the caller supplied an unreadable image.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::ImageDecode(_))
    }
}
