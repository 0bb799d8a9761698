//! Cloudinary upload API payloads.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub secure_url: String,
    pub public_id: String,
    #[serde(default)]
    pub resource_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}
