//! Error types for remote operations.

use filmoteka_codec::CodecError;
use thiserror::Error;

/// Result type for remote operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the remote service.
///
/// None of these are retried automatically; they surface to the caller as
/// rejected operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never received a response.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The service answered with a non-2xx status.
    #[error("remote error: {status} {text}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// HTTP status text.
        text: String,
    },

    /// The response body did not decode into entities.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ClientError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ClientError::Remote {
            status: 503,
            text: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "remote error: 503 Service Unavailable");

        let err = ClientError::transport("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }
}
