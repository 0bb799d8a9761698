//! Media storage error types.

use thiserror::Error;

/// Media storage error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum UploadError {
    #[error("upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("network error during upload: {0}")]
    Network(String),

    #[error("invalid upload response: {0}")]
    InvalidResponse(String),

    #[error("missing storage credential: {0}")]
    MissingCredentials(&'static str),
}

impl UploadError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
