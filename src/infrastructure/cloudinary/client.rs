//! Cloudinary upload API client.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::dto::{ErrorResponse, UploadResponse};
use super::signature;
use crate::domain::errors::UploadError;
use crate::domain::ports::{FileUpload, MediaStoragePort, ResourceType, StoredAsset};
use crate::infrastructure::config::{CloudinaryConfig, SignatureAlgorithm};

/// Cloudinary account credentials.
pub struct CloudinaryCredentials {
    cloud_name: String,
    api_key: String,
    api_secret: Zeroizing<String>,
}

impl CloudinaryCredentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: Zeroizing::new(api_secret.into()),
        }
    }

    /// Reads credentials from configuration.
    ///
    /// # Errors
    /// Returns error naming the first missing credential.
    pub fn from_config(config: &CloudinaryConfig) -> Result<Self, UploadError> {
        let cloud_name = non_blank(config.cloud_name.as_deref())
            .ok_or(UploadError::MissingCredentials("cloud_name"))?;
        let api_key = non_blank(config.api_key.as_deref())
            .ok_or(UploadError::MissingCredentials("api_key"))?;
        let api_secret = non_blank(config.api_secret.as_deref())
            .ok_or(UploadError::MissingCredentials("api_secret"))?;

        Ok(Self::new(cloud_name, api_key, api_secret))
    }
}

impl fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Signed Cloudinary upload client.
///
/// Uploads carry no explicit timeout.
pub struct CloudinaryClient {
    client: Client,
    base_url: String,
    credentials: CloudinaryCredentials,
    signature_algorithm: SignatureAlgorithm,
}

impl fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("signature_algorithm", &self.signature_algorithm)
            .finish_non_exhaustive()
    }
}

impl CloudinaryClient {
    /// Creates client from configuration.
    ///
    /// # Errors
    /// Returns error if credentials are missing or HTTP client creation fails.
    pub fn new(config: &CloudinaryConfig) -> Result<Self, UploadError> {
        let credentials = CloudinaryCredentials::from_config(config)?;
        Ok(Self::with_credentials(&config.base_url, credentials)?
            .with_signature_algorithm(config.signature_algorithm))
    }

    /// Creates client with explicit endpoint and credentials.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_credentials(
        base_url: impl Into<String>,
        credentials: CloudinaryCredentials,
    ) -> Result<Self, UploadError> {
        let client = Client::builder()
            .build()
            .map_err(|e| UploadError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
            signature_algorithm: SignatureAlgorithm::default(),
        })
    }

    /// Sets the digest used for request signatures.
    #[must_use]
    pub fn with_signature_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = algorithm;
        self
    }

    fn upload_url(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/{}/{}/upload",
            self.base_url.trim_end_matches('/'),
            self.credentials.cloud_name,
            resource_type
        )
    }

    /// Adds timestamp, API key and signature to the parameters.
    fn signed_params(
        &self,
        mut params: BTreeMap<&'static str, String>,
        timestamp: i64,
    ) -> BTreeMap<&'static str, String> {
        params.insert("timestamp", timestamp.to_string());
        let signature = signature::sign(
            &params,
            &self.credentials.api_secret,
            self.signature_algorithm,
        );
        params.insert("api_key", self.credentials.api_key.clone());
        params.insert("signature", signature);
        params
    }

    fn form(&self, params: BTreeMap<&'static str, String>) -> Form {
        let signed = self.signed_params(params, chrono::Utc::now().timestamp());
        signed
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value))
    }

    async fn send(&self, resource_type: ResourceType, form: Form) -> Result<StoredAsset, UploadError> {
        let url = self.upload_url(resource_type);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach Cloudinary");
                UploadError::network(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse upload response");
            UploadError::invalid_response(e.to_string())
        })?;

        debug!(
            public_id = %body.public_id,
            resource_type = %body.resource_type,
            "Cloudinary accepted upload"
        );

        Ok(StoredAsset {
            secure_url: body.secure_url,
            public_id: body.public_id,
            resource_type: body.resource_type,
        })
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> UploadError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.error.message,
            Err(_) => format!("HTTP {status}"),
        };

        warn!(status = status.as_u16(), message = %message, "Cloudinary rejected upload");
        UploadError::rejected(status.as_u16(), message)
    }
}

#[async_trait]
impl MediaStoragePort for CloudinaryClient {
    async fn upload_remote(
        &self,
        source_url: &str,
        folder: &str,
    ) -> Result<StoredAsset, UploadError> {
        let params = BTreeMap::from([("folder", folder.to_string())]);
        let form = self.form(params).text("file", source_url.to_string());

        self.send(ResourceType::Auto, form).await
    }

    async fn upload_file(
        &self,
        file: FileUpload,
        folder: &str,
        allowed_formats: &[&str],
    ) -> Result<StoredAsset, UploadError> {
        let params = BTreeMap::from([
            ("folder", folder.to_string()),
            ("allowed_formats", allowed_formats.join(",")),
        ]);
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = self.form(params).part("file", part);

        self.send(ResourceType::Image, form).await
    }
}
