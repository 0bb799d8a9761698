//! CraveCart media tooling.
//!
//! Resolves links pasted by restaurant admins (direct image links or
//! ordinary webpages) to a single image, stores it on Cloudinary under the
//! app's upload namespaces, and talks to the backend API with the signed-in
//! user's bearer token.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cravecart-media";
