//! Image hint normalization.

use tracing::debug;
use url::Url;

use super::ImageUrlClassifier;

/// Turns scraped image hints into absolute URLs.
pub struct UrlNormalizer;

impl UrlNormalizer {
    /// Resolves a relative hint against the origin of the page it came from.
    ///
    /// Absolute HTTP(S) hints are returned as-is. Hints that cannot be joined
    /// are passed through unchanged and left for the storage service to judge.
    #[must_use]
    pub fn absolutize(hint: &str, page_url: &str) -> String {
        if ImageUrlClassifier::is_http_url(hint) {
            return hint.to_string();
        }

        let Some(base) = origin_base(page_url) else {
            debug!(page_url, "Page has no usable origin, passing hint through");
            return hint.to_string();
        };

        match base.join(hint) {
            Ok(resolved) => resolved.into(),
            Err(e) => {
                debug!(hint, error = %e, "Failed to resolve image hint, passing through");
                hint.to_string()
            }
        }
    }
}

fn origin_base(page_url: &str) -> Option<Url> {
    let page = Url::parse(page_url).ok()?;
    let origin = page.origin();
    if !origin.is_tuple() {
        return None;
    }
    Url::parse(&format!("{}/", origin.ascii_serialization())).ok()
}
