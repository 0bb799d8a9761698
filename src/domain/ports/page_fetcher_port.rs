//! Webpage fetch port definition.

use async_trait::async_trait;

use crate::domain::errors::FetchError;

/// Port for retrieving webpage markup.
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    /// Fetches the page and returns its body as text.
    ///
    /// Implementations must bound the request with a timeout and treat
    /// non-2xx responses as failures.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}
