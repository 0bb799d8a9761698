//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateless resolution helpers.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::UploadTarget;
pub use use_cases::{InspectLinkUseCase, ResolveImageUseCase, UploadFileUseCase};
