//! Webpage fetcher over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::debug;

use crate::domain::errors::FetchError;
use crate::domain::ports::PageFetcherPort;
use crate::infrastructure::config::MediaConfig;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Fetches page markup with a browser user agent and a bounded timeout.
pub struct HttpPageFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpPageFetcher {
    /// Creates fetcher from media configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &MediaConfig) -> Result<Self, FetchError> {
        Self::with_settings(&config.user_agent, Duration::from_secs(config.fetch_timeout_secs))
    }

    /// Creates fetcher with explicit user agent and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl PageFetcherPort for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, timeout_secs = self.timeout.as_secs_f64(), "Fetching webpage");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, ACCEPT_HTML)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "Webpage fetched");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_fetcher(timeout: Duration) -> HttpPageFetcher {
        let client = Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .unwrap();
        HttpPageFetcher { client, timeout }
    }

    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0_u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/menu")
    }

    #[test]
    fn test_fetcher_creation_uses_configured_timeout() {
        let fetcher = HttpPageFetcher::new(&MediaConfig::default()).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(6));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: text/html\r\ncontent-length: 13\r\nconnection: close\r\n\r\n<html></html>",
        )
        .await;
        let fetcher = local_fetcher(Duration::from_secs(6));

        let body = fetcher.fetch_page(&url).await.unwrap();

        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let url = serve_once(
            "HTTP/1.1 403 Forbidden\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let fetcher = local_fetcher(Duration::from_secs(6));

        let err = fetcher.fetch_page(&url).await.unwrap_err();

        assert_eq!(err, FetchError::Status(403));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let fetcher = local_fetcher(Duration::from_millis(200));

        let err = fetcher
            .fetch_page(&format!("http://{addr}/slow"))
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::Timeout);
    }
}
