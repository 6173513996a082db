//! Error types for the floor transform.

use thiserror::Error;

/// Error type for raw-buffer operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Buffer length or dimensions are inconsistent.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Floor region does not fit the image.
    #[error("invalid region: rows {start_y}..{end_y} in image of height {height}")]
    InvalidRegion {
        /// First region row.
        start_y: u32,
        /// One past the last region row.
        end_y: u32,
        /// Image height.
        height: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for the floor transform.
pub type OpsResult<T> = Result<T, OpsError>;
