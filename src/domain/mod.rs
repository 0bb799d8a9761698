//! Domain layer with core value objects, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{ImageCandidate, ResolvedImage, UploadNamespace};
pub use errors::{FetchError, MediaError, UploadError};
pub use ports::{MediaStoragePort, PageFetcherPort, SessionStoragePort};
