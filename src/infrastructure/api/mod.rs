//! Backend API client.

mod client;
mod error;

pub use client::{ApiClient, ApiResponse};
pub use error::ApiError;
