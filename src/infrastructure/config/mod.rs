//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{
    ApiConfig, AppConfig, CloudinaryConfig, LogLevel, MediaConfig, SignatureAlgorithm,
};
pub use args::{CliArgs, Command, SessionAction, TargetArgs};
pub use storage::{ConfigError, StorageManager};
