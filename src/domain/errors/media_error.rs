//! Caller-facing media error types.

use thiserror::Error;

use super::UploadError;

/// Message shown for every failed upload, whatever the cause.
pub const UPLOAD_FAILED_MESSAGE: &str = "failed to fetch/upload image from provided link";

/// Errors returned by media use cases.
///
/// Page fetch problems never appear here; they are reported through
/// [`ResolutionPath`](crate::domain::entities::ResolutionPath) instead.
#[derive(Debug, Error)]
pub enum MediaError {
    /// No link was supplied.
    #[error("image link must not be empty")]
    EmptyUrl,

    /// Local file has a format the storage accepts no uploads for.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Local file could not be read.
    #[error("failed to read image file: {0}")]
    Io(String),

    /// Storage service rejected or could not process the image.
    ///
    /// The cause is kept as the error source but never rendered.
    #[error("{}", UPLOAD_FAILED_MESSAGE)]
    Upload(#[source] UploadError),
}

impl MediaError {
    /// Returns the underlying storage error, if any.
    #[must_use]
    pub const fn upload_cause(&self) -> Option<&UploadError> {
        match self {
            Self::Upload(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<UploadError> for MediaError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_upload_error_does_not_leak_cause() {
        let err = MediaError::from(UploadError::rejected(400, "Invalid image file secret-detail"));
        let rendered = err.to_string();

        assert_eq!(rendered, UPLOAD_FAILED_MESSAGE);
        assert!(!rendered.contains("secret-detail"));
    }

    #[test]
    fn test_upload_error_keeps_source_chain() {
        let err = MediaError::from(UploadError::network("connection reset"));

        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("connection reset"));
        assert!(matches!(err.upload_cause(), Some(UploadError::Network(_))));
    }
}
