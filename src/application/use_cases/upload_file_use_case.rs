//! Local image file upload use case.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::{ResolutionPath, ResolvedImage};
use crate::domain::errors::MediaError;
use crate::domain::ports::{FileUpload, MediaStoragePort};

/// Formats accepted for direct file uploads.
pub const ALLOWED_FILE_FORMATS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Uploads an image file from disk.
#[derive(Clone)]
pub struct UploadFileUseCase {
    storage: Arc<dyn MediaStoragePort>,
}

impl UploadFileUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage: Arc<dyn MediaStoragePort>) -> Self {
        Self { storage }
    }

    /// Uploads the file under `folder`.
    ///
    /// # Errors
    /// Returns error if the format is not allowed, the file cannot be read,
    /// or the storage service fails.
    pub async fn execute(&self, path: &Path, folder: &str) -> Result<ResolvedImage, MediaError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !ALLOWED_FILE_FORMATS.contains(&extension.as_str()) {
            debug!(path = %path.display(), "Rejecting file with unsupported format");
            let shown = if extension.is_empty() {
                "<none>".to_string()
            } else {
                extension
            };
            return Err(MediaError::UnsupportedFormat(shown));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MediaError::Io(format!("{}: {e}", path.display())))?;

        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());

        debug!(file_name = %file_name, size = bytes.len(), folder, "Uploading image file");

        let asset = self
            .storage
            .upload_file(FileUpload { file_name, bytes }, folder, &ALLOWED_FILE_FORMATS)
            .await
            .map_err(|e| {
                error!(error = %e, path = %path.display(), "File upload failed");
                MediaError::Upload(e)
            })?;

        info!(public_url = %asset.secure_url, "Image file uploaded");

        Ok(ResolvedImage::new(
            asset.secure_url,
            folder,
            ResolutionPath::Direct,
        ))
    }
}
