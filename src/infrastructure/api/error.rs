//! Backend API client errors.

use thiserror::Error;

/// Backend API error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}
