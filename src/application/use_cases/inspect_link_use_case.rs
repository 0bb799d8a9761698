//! Link inspection use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::{ImageUrlClassifier, MetadataExtractor, UrlNormalizer};
use crate::domain::entities::{ResolutionPath, ResolvedSource};
use crate::domain::errors::MediaError;
use crate::domain::ports::PageFetcherPort;

/// Decides which URL a pasted link should be uploaded from.
#[derive(Clone)]
pub struct InspectLinkUseCase {
    fetcher: Arc<dyn PageFetcherPort>,
}

impl InspectLinkUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(fetcher: Arc<dyn PageFetcherPort>) -> Self {
        Self { fetcher }
    }

    /// Picks the URL to upload for a link, without uploading.
    ///
    /// Page fetch failures are absorbed and reported through the returned
    /// [`ResolutionPath`].
    ///
    /// # Errors
    /// Returns error if the link is empty.
    pub async fn execute(&self, url: &str) -> Result<ResolvedSource, MediaError> {
        if url.trim().is_empty() {
            return Err(MediaError::EmptyUrl);
        }

        if ImageUrlClassifier::is_likely_direct_image(url) {
            debug!(url, "Link points at an image, skipping page analysis");
            return Ok(ResolvedSource {
                upload_url: url.to_string(),
                path: ResolutionPath::Direct,
            });
        }

        if !ImageUrlClassifier::is_http_url(url) {
            debug!(url, "Link is not HTTP(S), passing through");
            return Ok(ResolvedSource {
                upload_url: url.to_string(),
                path: ResolutionPath::PassThrough,
            });
        }

        info!(url, "Analyzing webpage for image");

        let html = match self.fetcher.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url, error = %e, "Failed to fetch webpage, using original URL as fallback");
                return Ok(ResolvedSource {
                    upload_url: url.to_string(),
                    path: ResolutionPath::FetchFailed {
                        reason: e.to_string(),
                    },
                });
            }
        };

        let Some(candidate) = MetadataExtractor::extract(&html) else {
            debug!(url, "No image hints found in page");
            return Ok(ResolvedSource {
                upload_url: url.to_string(),
                path: ResolutionPath::NoHints,
            });
        };

        let origin = candidate.origin();
        let hint = candidate.into_source_url();
        let upload_url = UrlNormalizer::absolutize(&hint, url);

        info!(%origin, image_url = %upload_url, "Found image hint");

        Ok(ResolvedSource {
            upload_url,
            path: ResolutionPath::Scraped {
                origin,
                source_url: hint,
            },
        })
    }
}
