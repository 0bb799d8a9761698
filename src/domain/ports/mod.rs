//! Port definitions for external services.

mod media_storage_port;
mod page_fetcher_port;
mod session_storage_port;

pub use media_storage_port::{FileUpload, MediaStoragePort, ResourceType, StoredAsset};
pub use page_fetcher_port::PageFetcherPort;
pub use session_storage_port::SessionStoragePort;
