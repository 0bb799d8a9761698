//! Image resolution value objects.

use std::fmt;

/// Where an image candidate was found.
///
/// Variants are declared in priority order: a candidate from an earlier
/// variant always wins over a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CandidateOrigin {
    /// The input link already points at an image.
    Direct,
    /// Linked-data `image` property or `ImageObject`.
    StructuredData,
    /// `og:image` meta tag.
    OpenGraph,
    /// `twitter:image` meta tag.
    SocialCard,
}

impl CandidateOrigin {
    /// Returns human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::StructuredData => "structured-data",
            Self::OpenGraph => "open-graph",
            Self::SocialCard => "social-card",
        }
    }
}

impl fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Image URL found while resolving a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    source_url: String,
    origin: CandidateOrigin,
}

impl ImageCandidate {
    /// Creates new candidate.
    #[must_use]
    pub fn new(source_url: impl Into<String>, origin: CandidateOrigin) -> Self {
        Self {
            source_url: source_url.into(),
            origin,
        }
    }

    /// Returns the candidate origin.
    #[must_use]
    pub const fn origin(&self) -> CandidateOrigin {
        self.origin
    }

    /// Consumes candidate and returns the URL.
    #[must_use]
    pub fn into_source_url(self) -> String {
        self.source_url
    }
}

/// How the uploaded source URL was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionPath {
    /// Input looked like an image link and was used unchanged.
    Direct,
    /// A hint was scraped from the page.
    Scraped {
        /// Category the hint came from.
        origin: CandidateOrigin,
        /// Hint as written in the page, before normalization.
        source_url: String,
    },
    /// Page fetched but no hint found; input used unchanged.
    NoHints,
    /// Page fetch failed; input used unchanged.
    FetchFailed {
        /// Fetch failure description.
        reason: String,
    },
    /// Input is neither an image link nor an HTTP(S) page.
    PassThrough,
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct image link"),
            Self::Scraped { origin, .. } => write!(f, "scraped from {origin}"),
            Self::NoHints => write!(f, "no image hints found, using original link"),
            Self::FetchFailed { reason } => {
                write!(f, "page fetch failed ({reason}), using original link")
            }
            Self::PassThrough => write!(f, "passed through unchanged"),
        }
    }
}

/// Upload source chosen for a link, before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// URL handed to the storage service.
    pub upload_url: String,
    /// How it was chosen.
    pub path: ResolutionPath,
}

/// Image stored by the media service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    public_url: String,
    folder: String,
    path: ResolutionPath,
}

impl ResolvedImage {
    /// Creates new resolved image.
    #[must_use]
    pub fn new(public_url: impl Into<String>, folder: impl Into<String>, path: ResolutionPath) -> Self {
        Self {
            public_url: public_url.into(),
            folder: folder.into(),
            path,
        }
    }

    /// Returns the public URL reported by the storage service.
    #[must_use]
    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    /// Returns the namespace the image was stored under.
    #[must_use]
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Returns how the upload source was chosen.
    #[must_use]
    pub const fn path(&self) -> &ResolutionPath {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_order_follows_priority() {
        assert!(CandidateOrigin::Direct < CandidateOrigin::StructuredData);
        assert!(CandidateOrigin::StructuredData < CandidateOrigin::OpenGraph);
        assert!(CandidateOrigin::OpenGraph < CandidateOrigin::SocialCard);
    }

    #[test]
    fn test_fetch_failed_display_includes_reason() {
        let path = ResolutionPath::FetchFailed {
            reason: "HTTP 404".to_string(),
        };
        assert!(path.to_string().contains("HTTP 404"));
    }
}
