//! Use case implementations.

mod inspect_link_use_case;
mod resolve_image_use_case;
mod upload_file_use_case;

pub use inspect_link_use_case::InspectLinkUseCase;
pub use resolve_image_use_case::ResolveImageUseCase;
pub use upload_file_use_case::{ALLOWED_FILE_FORMATS, UploadFileUseCase};
