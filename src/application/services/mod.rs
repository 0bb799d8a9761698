//! Stateless resolution helpers.

mod image_url_classifier;
mod metadata_extractor;
mod url_normalizer;

pub use image_url_classifier::{IMAGE_EXTENSIONS, ImageUrlClassifier};
pub use metadata_extractor::MetadataExtractor;
pub use url_normalizer::UrlNormalizer;
