//! Image resolution use case.

use std::sync::Arc;

use tracing::{debug, error, info};

use super::InspectLinkUseCase;
use crate::domain::entities::ResolvedImage;
use crate::domain::errors::MediaError;
use crate::domain::ports::{MediaStoragePort, PageFetcherPort};

/// Resolves a pasted link to an image and stores it.
#[derive(Clone)]
pub struct ResolveImageUseCase {
    inspector: InspectLinkUseCase,
    storage: Arc<dyn MediaStoragePort>,
}

impl ResolveImageUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(fetcher: Arc<dyn PageFetcherPort>, storage: Arc<dyn MediaStoragePort>) -> Self {
        Self {
            inspector: InspectLinkUseCase::new(fetcher),
            storage,
        }
    }

    /// Resolves the link and uploads the chosen image under `folder`.
    ///
    /// Every call uploads; nothing is memoized.
    ///
    /// # Errors
    /// Returns [`MediaError::EmptyUrl`] for an empty link and
    /// [`MediaError::Upload`] if the storage service fails.
    pub async fn resolve_and_upload(
        &self,
        url: &str,
        folder: &str,
    ) -> Result<ResolvedImage, MediaError> {
        let source = self.inspector.execute(url).await?;

        debug!(upload_url = %source.upload_url, folder, "Uploading image");

        let asset = self
            .storage
            .upload_remote(&source.upload_url, folder)
            .await
            .map_err(|e| {
                error!(error = %e, upload_url = %source.upload_url, "Smart fetch failed");
                MediaError::Upload(e)
            })?;

        info!(
            public_url = %asset.secure_url,
            public_id = %asset.public_id,
            path = %source.path,
            "Image uploaded"
        );

        Ok(ResolvedImage::new(asset.secure_url, folder, source.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CandidateOrigin, ResolutionPath};
    use crate::domain::errors::{FetchError, UPLOAD_FAILED_MESSAGE, UploadError};
    use crate::domain::ports::mocks::{MockMediaStorage, MockPageFetcher};
    use tokio_test::assert_ok;

    const FOLDER: &str = "cravecart/foods";

    fn use_case(
        fetcher: MockPageFetcher,
        storage: MockMediaStorage,
    ) -> (ResolveImageUseCase, Arc<MockPageFetcher>, Arc<MockMediaStorage>) {
        let fetcher = Arc::new(fetcher);
        let storage = Arc::new(storage);
        (
            ResolveImageUseCase::new(fetcher.clone(), storage.clone()),
            fetcher,
            storage,
        )
    }

    fn uploaded(storage: &MockMediaStorage) -> Vec<String> {
        storage.calls().into_iter().map(|c| c.source).collect()
    }

    #[tokio::test]
    async fn test_direct_image_uploaded_verbatim_without_fetch() {
        let (use_case, fetcher, storage) = use_case(MockPageFetcher::new(), MockMediaStorage::new());

        let image = assert_ok!(
            use_case
                .resolve_and_upload("https://x.test/pic.JPG?x=1", "f")
                .await
        );

        assert_eq!(uploaded(&storage), vec!["https://x.test/pic.JPG?x=1"]);
        assert!(fetcher.requests().is_empty());
        assert_eq!(image.path(), &ResolutionPath::Direct);
        assert_eq!(image.folder(), "f");
    }

    #[tokio::test]
    async fn test_structured_data_beats_open_graph() {
        let page = "https://x.test/dish";
        let html = r#"<meta property="og:image" content="https://x.test/b.png">
            <script>{"image": "https://x.test/a.png"}</script>"#;
        let (use_case, _, storage) = use_case(
            MockPageFetcher::new().with_page(page, html),
            MockMediaStorage::new(),
        );

        let image = use_case.resolve_and_upload(page, FOLDER).await.unwrap();

        assert_eq!(uploaded(&storage), vec!["https://x.test/a.png"]);
        assert!(matches!(
            image.path(),
            ResolutionPath::Scraped {
                origin: CandidateOrigin::StructuredData,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_placeholder_falls_back_to_open_graph_then_twitter() {
        let with_og = "https://x.test/og";
        let without_og = "https://x.test/tw";
        let fetcher = MockPageFetcher::new()
            .with_page(
                with_og,
                r#"<script>{"image":"https://x.test/placeholder.png"}</script>
                <meta property="og:image" content="https://x.test/og.png">
                <meta name="twitter:image" content="https://x.test/tw.png">"#,
            )
            .with_page(
                without_og,
                r#"<script>{"image":"https://x.test/placeholder.png"}</script>
                <meta name="twitter:image" content="https://x.test/tw.png">"#,
            );
        let (use_case, _, storage) = use_case(fetcher, MockMediaStorage::new());

        use_case.resolve_and_upload(with_og, FOLDER).await.unwrap();
        use_case.resolve_and_upload(without_og, FOLDER).await.unwrap();

        assert_eq!(
            uploaded(&storage),
            vec!["https://x.test/og.png", "https://x.test/tw.png"]
        );
    }

    #[tokio::test]
    async fn test_relative_hint_resolved_against_page_origin() {
        let page = "https://site.test/menu";
        let (use_case, _, storage) = use_case(
            MockPageFetcher::new()
                .with_page(page, r#"<meta property="og:image" content="/img/dish.png">"#),
            MockMediaStorage::new(),
        );

        let image = use_case.resolve_and_upload(page, FOLDER).await.unwrap();

        assert_eq!(uploaded(&storage), vec!["https://site.test/img/dish.png"]);
        assert_eq!(
            image.path(),
            &ResolutionPath::Scraped {
                origin: CandidateOrigin::OpenGraph,
                source_url: "/img/dish.png".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_uploads_original_url() {
        let page = "https://slow.test/menu";
        let (use_case, _, storage) = use_case(
            MockPageFetcher::new().with_failure(page, FetchError::Timeout),
            MockMediaStorage::new(),
        );

        let image = use_case.resolve_and_upload(page, FOLDER).await.unwrap();

        assert_eq!(uploaded(&storage), vec![page]);
        assert!(matches!(image.path(), ResolutionPath::FetchFailed { reason } if reason.contains("timed out")));
    }

    #[tokio::test]
    async fn test_no_hints_uploads_original_url() {
        let page = "https://plain.test/about";
        let (use_case, _, storage) = use_case(
            MockPageFetcher::new().with_page(page, "<html><body>About us</body></html>"),
            MockMediaStorage::new(),
        );

        let image = use_case.resolve_and_upload(page, FOLDER).await.unwrap();

        assert_eq!(uploaded(&storage), vec![page]);
        assert_eq!(image.path(), &ResolutionPath::NoHints);
    }

    #[tokio::test]
    async fn test_non_http_input_passed_through_without_fetch() {
        let (use_case, fetcher, storage) = use_case(MockPageFetcher::new(), MockMediaStorage::new());

        let image = use_case
            .resolve_and_upload("ftp://files.test/dish", FOLDER)
            .await
            .unwrap();

        assert!(fetcher.requests().is_empty());
        assert_eq!(uploaded(&storage), vec!["ftp://files.test/dish"]);
        assert_eq!(image.path(), &ResolutionPath::PassThrough);
    }

    #[tokio::test]
    async fn test_upload_failure_is_uniform_and_hides_cause() {
        let (use_case, _, _) = use_case(
            MockPageFetcher::new(),
            MockMediaStorage::failing(UploadError::rejected(400, "Resource not found - internal-id-42")),
        );

        let err = use_case
            .resolve_and_upload("https://x.test/pic.png", FOLDER)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), UPLOAD_FAILED_MESSAGE);
        assert!(!err.to_string().contains("internal-id-42"));
        assert!(matches!(err.upload_cause(), Some(UploadError::Rejected { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_repeated_calls_upload_each_time() {
        let (use_case, _, storage) = use_case(MockPageFetcher::new(), MockMediaStorage::new());

        use_case
            .resolve_and_upload("https://x.test/pic.png", FOLDER)
            .await
            .unwrap();
        use_case
            .resolve_and_upload("https://x.test/pic.png", FOLDER)
            .await
            .unwrap();

        assert_eq!(storage.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_url_rejected_before_network() {
        let (use_case, fetcher, storage) = use_case(MockPageFetcher::new(), MockMediaStorage::new());

        let err = use_case.resolve_and_upload("  ", FOLDER).await.unwrap_err();

        assert!(matches!(err, MediaError::EmptyUrl));
        assert!(fetcher.requests().is_empty());
        assert!(storage.calls().is_empty());
    }
}
