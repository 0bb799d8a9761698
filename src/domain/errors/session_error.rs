//! Session storage error types.

use thiserror::Error;

/// Session storage error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SessionError {
    #[error("session storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize session: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session storage location unavailable")]
    LocationUnavailable,
}
