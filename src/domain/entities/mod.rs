//! Domain entity definitions.

mod image;
mod namespace;
mod session;

pub use image::{CandidateOrigin, ImageCandidate, ResolutionPath, ResolvedImage, ResolvedSource};
pub use namespace::{DEFAULT_APP_NAMESPACE, UploadNamespace};
pub use session::{SessionToken, UserSession};
