//! Error types for fieldview.
//!
//! Layout derivation and rendering share one error enum built with thiserror.
//! Every out-of-range read of a header-declared position surfaces here as
//! `MalformedHeader` rather than reading past the buffer.

use thiserror::Error;

/// Main error type for fieldview operations.
#[derive(Debug, Error)]
pub enum FieldviewError {
    /// A header-declared offset points outside the buffer
    #[error("Malformed header at offset {offset:#x}: {message} (needed {needed} bytes)")]
    MalformedHeader {
        offset: u64,
        needed: usize,
        message: String,
    },

    /// Strict-mode dump whose descriptors do not cover the buffer exactly
    #[error("Layout mismatch: descriptors cover {declared} bytes, buffer holds {actual}")]
    LayoutMismatch { declared: u64, actual: u64 },

    /// Two descriptors claim the same bytes under the reject policy
    #[error("Overlapping fields at offset {offset:#x}: `{incoming}` collides with `{existing}`")]
    OverlappingFields {
        offset: u64,
        existing: String,
        incoming: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input loading errors
    #[error("I/O error: {0}")]
    Io(#[from] crate::io::error::IoError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fieldview operations
pub type Result<T> = std::result::Result<T, FieldviewError>;

impl From<serde_json::Error> for FieldviewError {
    fn from(err: serde_json::Error) -> Self {
        FieldviewError::Serialization(err.to_string())
    }
}
