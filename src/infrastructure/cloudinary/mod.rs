//! Cloudinary media storage adapter.

mod client;
mod dto;
pub mod signature;

pub use client::{CloudinaryClient, CloudinaryCredentials};
