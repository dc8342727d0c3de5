//! Error types for the codec.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding wire data.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A required section of the entity is absent or structurally invalid.
    ///
    /// Raised when `film_info`, `user_details`, or the comment list is
    /// missing, or when a present field has an incompatible shape. Missing
    /// leaf fields do not produce this error; they take their defaults.
    #[error("malformed entity: {0}")]
    MalformedEntity(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::MalformedEntity(err.to_string())
    }
}
