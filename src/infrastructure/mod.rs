//! Infrastructure layer with external service adapters.

/// Backend API client.
pub mod api;
/// Cloudinary media storage.
pub mod cloudinary;
/// Application configuration.
pub mod config;
/// Webpage fetching.
pub mod http;
/// Session storage adapters.
pub mod session;

pub use api::{ApiClient, ApiError, ApiResponse};
pub use cloudinary::{CloudinaryClient, CloudinaryCredentials};
pub use config::{AppConfig, CliArgs, Command, LogLevel, SessionAction, StorageManager};
pub use http::HttpPageFetcher;
pub use session::FileSessionStorage;
