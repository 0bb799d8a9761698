//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::DEFAULT_APP_NAMESPACE;

const APP_NAME: &str = "cravecart-media";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "cravecart";

/// Browser user agent sent when fetching pages; many sites reject bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Cloudinary API endpoint.
pub const DEFAULT_CLOUDINARY_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Default backend API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://cravecart-9074.onrender.com/api";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Digest used to sign Cloudinary upload requests.
///
/// Must match the account's signature algorithm setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    /// SHA-1, the account default.
    #[default]
    Sha1,
    /// SHA-256.
    Sha256,
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Image resolution settings.
    #[serde(default)]
    pub media: MediaConfig,

    /// Cloudinary account settings.
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,

    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Image resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Top-level upload namespace.
    #[serde(default = "default_app_namespace")]
    pub app_namespace: String,

    /// Webpage fetch timeout in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// User agent used for webpage fetches.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            app_namespace: default_app_namespace(),
            fetch_timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Cloudinary account configuration.
///
/// Credentials are usually supplied through `CLOUDINARY_*` environment
/// variables rather than the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    /// Cloud name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,

    /// API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API secret.
    #[serde(default, skip_serializing)]
    pub api_secret: Option<String>,

    /// Upload API endpoint.
    #[serde(default = "default_cloudinary_base_url")]
    pub base_url: String,

    /// Request signing digest.
    #[serde(default)]
    pub signature_algorithm: SignatureAlgorithm,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            base_url: default_cloudinary_base_url(),
            signature_algorithm: SignatureAlgorithm::default(),
        }
    }
}

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

fn default_app_namespace() -> String {
    DEFAULT_APP_NAMESPACE.to_string()
}

fn default_fetch_timeout() -> u64 {
    6
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_cloudinary_base_url() -> String {
    DEFAULT_CLOUDINARY_BASE_URL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments (and their environment fallbacks) into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(app_namespace) = &args.app_namespace {
            self.media.app_namespace.clone_from(app_namespace);
        }
        if let Some(timeout) = args.fetch_timeout {
            self.media.fetch_timeout_secs = timeout;
        }
        if let Some(cloud_name) = &args.cloud_name {
            self.cloudinary.cloud_name = Some(cloud_name.clone());
        }
        if let Some(api_key) = &args.api_key {
            self.cloudinary.api_key = Some(api_key.clone());
        }
        if let Some(api_secret) = &args.api_secret {
            self.cloudinary.api_secret = Some(api_secret.clone());
        }
        if let Some(algorithm) = args.signature_algorithm {
            self.cloudinary.signature_algorithm = algorithm;
        }
        if let Some(api_url) = &args.api_url {
            self.api.base_url.clone_from(api_url);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the log file path, if file logging was requested.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            media: MediaConfig::default(),
            cloudinary: CloudinaryConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_sections() {
        let toml_content = r#"
            log_level = "debug"

            [media]
            app_namespace = "cravecart-staging"
            fetch_timeout_secs = 5

            [cloudinary]
            cloud_name = "demo"
            api_key = "123456789012345"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.media.app_namespace, "cravecart-staging");
        assert_eq!(config.media.fetch_timeout_secs, 5);
        assert_eq!(config.media.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.cloudinary.cloud_name.as_deref(), Some("demo"));
        assert_eq!(config.cloudinary.base_url, DEFAULT_CLOUDINARY_BASE_URL);
        assert_eq!(config.cloudinary.signature_algorithm, SignatureAlgorithm::Sha1);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_parse_sha256_signature_algorithm() {
        let config: AppConfig = toml::from_str(
            r#"
            [cloudinary]
            signature_algorithm = "sha256"
        "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.cloudinary.signature_algorithm, SignatureAlgorithm::Sha256);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.media.app_namespace, "cravecart");
        assert_eq!(config.media.fetch_timeout_secs, 6);
        assert!(config.cloudinary.api_secret.is_none());
    }

    #[test]
    fn test_secret_never_serialized() {
        let mut config = AppConfig::default();
        config.cloudinary.api_secret = Some("shh-secret".to_string());

        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(!rendered.contains("shh-secret"));
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "cravecart-media",
            "--fetch-timeout",
            "7",
            "--cloud-name",
            "prod-cloud",
            "--app-namespace",
            "shop",
            "--signature-algorithm",
            "sha256",
            "inspect",
            "https://x.test/menu",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.media.fetch_timeout_secs, 7);
        assert_eq!(config.media.app_namespace, "shop");
        assert_eq!(config.cloudinary.cloud_name.as_deref(), Some("prod-cloud"));
        assert_eq!(config.cloudinary.signature_algorithm, SignatureAlgorithm::Sha256);
    }
}
