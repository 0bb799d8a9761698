//! Webpage fetch error types.

use thiserror::Error;

/// Webpage fetch error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("failed to connect: {0}")]
    Connect(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else if e.is_body() || e.is_decode() {
            Self::Body(e.to_string())
        } else {
            Self::Connect(e.to_string())
        }
    }
}
