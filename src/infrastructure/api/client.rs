//! Backend API client with bearer-token authentication.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, header};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ApiError;
use crate::domain::ports::SessionStoragePort;

/// Response from the backend API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, `Null` when empty or not JSON.
    pub body: Value,
}

impl ApiResponse {
    /// Returns whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// HTTP client for the food-ordering backend.
///
/// Every request carries the stored session's bearer token when one exists.
pub struct ApiClient {
    client: Client,
    base_url: String,
    sessions: Arc<dyn SessionStoragePort>,
}

impl ApiClient {
    /// Creates client for the given base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        base_url: impl Into<String>,
        sessions: Arc<dyn SessionStoragePort>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            sessions,
        })
    }

    /// Returns the absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Starts a request, attaching `Authorization: Bearer <token>` if signed in.
    ///
    /// A session that cannot be read is treated as signed out.
    pub async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));

        let session = match self.sessions.load().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to read session, sending request unauthenticated");
                None
            }
        };

        match session.as_ref().and_then(|s| s.usable_token()) {
            Some(token) => {
                debug!(token = %token, "Attaching bearer token");
                builder.header(header::AUTHORIZATION, token.bearer())
            }
            None => builder,
        }
    }

    /// Sends a request with an optional JSON body.
    ///
    /// # Errors
    /// Returns error if the method is invalid or the request fails to send.
    pub async fn send_json(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| ApiError::InvalidMethod(method.to_string()))?;

        let mut builder = self.request(method.clone(), path).await;
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(%method, url = %self.url(path), "Sending API request");

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}
