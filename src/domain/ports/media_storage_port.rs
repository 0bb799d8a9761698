//! Media storage port definition.

use std::fmt;

use async_trait::async_trait;

use crate::domain::errors::UploadError;

/// Resource type requested from the storage service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    /// Let the service detect image, video or raw.
    Auto,
    /// Image only.
    Image,
}

impl ResourceType {
    /// Returns the API path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local file content to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name sent with the content.
    pub file_name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Asset accepted by the storage service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Stable HTTPS URL of the asset.
    pub secure_url: String,
    /// Service-side identifier.
    pub public_id: String,
    /// Detected resource type.
    pub resource_type: String,
}

/// Port for the hosted media storage service.
#[async_trait]
pub trait MediaStoragePort: Send + Sync {
    /// Ingests a remote URL with resource-type auto-detection.
    async fn upload_remote(&self, source_url: &str, folder: &str)
    -> Result<StoredAsset, UploadError>;

    /// Uploads local image content restricted to the given formats.
    async fn upload_file(
        &self,
        file: FileUpload,
        folder: &str,
        allowed_formats: &[&str],
    ) -> Result<StoredAsset, UploadError>;
}
