//! Data transfer objects.

mod upload_dto;

pub use upload_dto::UploadTarget;
