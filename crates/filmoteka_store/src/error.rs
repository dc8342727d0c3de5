//! Error types for cache storage.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while persisting cache state.
///
/// Reads never produce these: a missing or unparseable blob degrades to an
/// empty cache by contract. Writes surface failures of the host storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error from the host storage.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The cache snapshot could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.to_string().contains("denied"));
    }
}
