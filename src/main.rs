use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cravecart_media::application::{
    InspectLinkUseCase, ResolveImageUseCase, UploadFileUseCase, UploadTarget,
};
use cravecart_media::domain::entities::{ResolvedImage, SessionToken, UserSession};
use cravecart_media::domain::ports::SessionStoragePort;
use cravecart_media::infrastructure::config::TargetArgs;
use cravecart_media::infrastructure::{
    ApiClient, AppConfig, CliArgs, CloudinaryClient, Command, FileSessionStorage, HttpPageFetcher,
    SessionAction, StorageManager,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        // stdout carries command output
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, StorageManager)> {
    let storage = StorageManager::new().wrap_err("Failed to locate config directory")?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("Failed to load config")?;
    config.merge_with_args(args);
    Ok((config, storage))
}

fn page_fetcher(config: &AppConfig) -> Result<Arc<HttpPageFetcher>> {
    let fetcher = HttpPageFetcher::new(&config.media).wrap_err("Failed to create page fetcher")?;
    Ok(Arc::new(fetcher))
}

fn media_storage(config: &AppConfig) -> Result<Arc<CloudinaryClient>> {
    let client =
        CloudinaryClient::new(&config.cloudinary).wrap_err("Cloudinary is not configured")?;
    Ok(Arc::new(client))
}

fn target_folder(target: TargetArgs, config: &AppConfig) -> String {
    UploadTarget::from_parts(target.folder, target.route).folder(&config.media.app_namespace)
}

fn print_image(image: &ResolvedImage) {
    println!("{}", image.public_url());
    info!(folder = image.folder(), path = %image.path(), "Upload complete");
}

async fn run_session(action: SessionAction, sessions: &FileSessionStorage) -> Result<()> {
    match action {
        SessionAction::Set {
            token,
            name,
            email,
            role,
        } => {
            let token = SessionToken::new(token).ok_or_else(|| eyre!("Token must not be empty"))?;
            let session = UserSession {
                name,
                email,
                role,
                ..UserSession::with_token(token)
            };
            sessions
                .store(&session)
                .await
                .wrap_err("Failed to store session")?;
            println!("Session saved to {}", sessions.path().display());
        }
        SessionAction::Show => match sessions.load().await? {
            Some(session) => {
                let token = session
                    .usable_token()
                    .map_or_else(|| "<none>".to_string(), SessionToken::masked);
                println!("token: {token}");
                println!("name:  {}", session.name.as_deref().unwrap_or("-"));
                println!("email: {}", session.email.as_deref().unwrap_or("-"));
                println!("role:  {}", session.role.as_deref().unwrap_or("-"));
            }
            None => println!("No session stored"),
        },
        SessionAction::Clear => {
            sessions.clear().await.wrap_err("Failed to clear session")?;
            println!("Session cleared");
        }
    }

    Ok(())
}

async fn run(command: Command, config: &AppConfig, storage: &StorageManager) -> Result<()> {
    match command {
        Command::Resolve { url, target } => {
            let folder = target_folder(target, config);
            let use_case = ResolveImageUseCase::new(page_fetcher(config)?, media_storage(config)?);
            let image = use_case.resolve_and_upload(&url, &folder).await?;
            print_image(&image);
        }
        Command::Inspect { url } => {
            let use_case = InspectLinkUseCase::new(page_fetcher(config)?);
            let source = use_case.execute(&url).await?;
            println!("{}", source.upload_url);
            println!("{}", source.path);
        }
        Command::Upload { path, target } => {
            let folder = target_folder(target, config);
            let use_case = UploadFileUseCase::new(media_storage(config)?);
            let image = use_case.execute(&path, &folder).await?;
            print_image(&image);
        }
        Command::Session { action } => {
            let sessions = FileSessionStorage::new(storage.session_path());
            run_session(action, &sessions).await?;
        }
        Command::Request { method, path, body } => {
            let body = body
                .map(|raw| serde_json::from_str::<serde_json::Value>(&raw))
                .transpose()
                .wrap_err("Request body is not valid JSON")?;
            let sessions = Arc::new(FileSessionStorage::new(storage.session_path()));
            let client = ApiClient::new(&config.api.base_url, sessions)?;

            let response = client.send_json(&method, &path, body.as_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&response.body)?);

            if !response.is_success() {
                return Err(eyre!("API responded with status {}", response.status));
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let (config, storage) = load_config(&args)?;

    init_logging(&config)?;

    info!(version = cravecart_media::VERSION, "Starting {}", cravecart_media::NAME);

    run(args.command, &config, &storage).await
}
