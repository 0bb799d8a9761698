//! Link classification helpers.

use regex::Regex;
use std::sync::LazyLock;

/// Extensions that mark a link as a direct image.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Classifies pasted links without touching the network.
pub struct ImageUrlClassifier;

impl ImageUrlClassifier {
    /// Returns whether the link path ends in an image extension.
    ///
    /// Query string and fragment are ignored, case is not significant.
    #[must_use]
    pub fn is_likely_direct_image(url: &str) -> bool {
        static IMAGE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"(?i)\.(?:{})$", IMAGE_EXTENSIONS.join("|"))).unwrap()
        });

        let path = url.split(['?', '#']).next().unwrap_or_default();
        IMAGE_PATH_RE.is_match(path)
    }

    /// Returns whether the link starts with an HTTP(S) scheme.
    #[must_use]
    pub fn is_http_url(url: &str) -> bool {
        starts_with_ignore_case(url, "https://") || starts_with_ignore_case(url, "http://")
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
