//! Error types for style profiles.

use thiserror::Error;

/// Error type for profile validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// A profile parameter is NaN, infinite or outside its range.
    #[error("invalid profile value for {field}: {value}")]
    InvalidProfile {
        /// Parameter name.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;
