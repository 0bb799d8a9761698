//! Domain error types.

mod fetch_error;
mod media_error;
mod session_error;
mod upload_error;

pub use fetch_error::FetchError;
pub use media_error::{MediaError, UPLOAD_FAILED_MESSAGE};
pub use session_error::SessionError;
pub use upload_error::UploadError;
