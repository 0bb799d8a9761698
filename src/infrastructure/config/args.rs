//! Command-line arguments.

use super::app_config::{LogLevel, SignatureAlgorithm};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "cravecart-media",
    version,
    about = "Resolve pasted links to images and upload them to Cloudinary",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Top-level upload namespace.
    #[arg(long, env = "CRAVECART_APP_NAMESPACE", global = true)]
    pub app_namespace: Option<String>,

    /// Webpage fetch timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub fetch_timeout: Option<u64>,

    /// Cloudinary cloud name.
    #[arg(long, env = "CLOUDINARY_CLOUD_NAME", global = true)]
    pub cloud_name: Option<String>,

    /// Cloudinary API key.
    #[arg(long, env = "CLOUDINARY_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Cloudinary API secret.
    #[arg(long, env = "CLOUDINARY_API_SECRET", hide_env_values = true, global = true)]
    pub api_secret: Option<String>,

    /// Cloudinary request signing digest.
    #[arg(long, value_enum, env = "CLOUDINARY_SIGNATURE_ALGORITHM", global = true)]
    pub signature_algorithm: Option<SignatureAlgorithm>,

    /// Backend API base URL.
    #[arg(long, env = "CRAVECART_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a link (image or webpage) and upload the image.
    Resolve {
        /// Image or page link.
        url: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show which image a link resolves to, without uploading.
    Inspect {
        /// Image or page link.
        url: String,
    },

    /// Upload a local jpg/png file.
    Upload {
        /// Image file path.
        path: PathBuf,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Manage the stored API session.
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Send a request to the backend API with the stored bearer token.
    Request {
        /// HTTP method.
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// Path relative to the API base URL, e.g. `/restaurants`.
        path: String,

        /// JSON request body.
        #[arg(long)]
        body: Option<String>,
    },
}

/// Upload destination options.
#[derive(Debug, Clone, clap::Args)]
pub struct TargetArgs {
    /// Storage folder, overrides `--route`.
    #[arg(long)]
    pub folder: Option<String>,

    /// API route that triggered the upload, e.g. `/api/restaurants`.
    #[arg(long)]
    pub route: Option<String>,
}

/// Session subcommands.
#[derive(Debug, Subcommand)]
pub enum SessionAction {
    /// Store a session token.
    Set {
        /// Bearer token issued at login.
        #[arg(long, env = "CRAVECART_TOKEN", hide_env_values = true)]
        token: String,

        /// Display name.
        #[arg(long)]
        name: Option<String>,

        /// Account email.
        #[arg(long)]
        email: Option<String>,

        /// Account role.
        #[arg(long)]
        role: Option<String>,
    },
    /// Print the stored session with the token masked.
    Show,
    /// Remove the stored session.
    Clear,
}
