//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while coordinating reads and writes.
///
/// A failed online operation surfaces here as-is; the coordinator never
/// downgrades a remote failure into an offline fallback and never retries.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote service operation failed.
    #[error(transparent)]
    Client(#[from] filmoteka_client::ClientError),

    /// The local cache could not be written.
    #[error(transparent)]
    Store(#[from] filmoteka_store::StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmoteka_client::ClientError;

    #[test]
    fn client_error_passes_through() {
        let err: SyncError = ClientError::Remote {
            status: 404,
            text: "Not Found".into(),
        }
        .into();
        assert_eq!(err.to_string(), "remote error: 404 Not Found");
    }
}
