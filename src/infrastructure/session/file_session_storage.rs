//! File-backed session storage.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::UserSession;
use crate::domain::errors::SessionError;
use crate::domain::ports::SessionStoragePort;

/// Keeps the `userInfo` session as JSON on disk.
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates storage at the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the session file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(path: &Path, content: &[u8]) -> Result<(), SessionError> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid session path"))?;
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content)?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStoragePort for FileSessionStorage {
    async fn load(&self) -> Result<Option<UserSession>, SessionError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored session");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<UserSession>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(error = %e, "Failed to parse session file, ignoring it");
                Ok(None)
            }
        }
    }

    async fn store(&self, session: &UserSession) -> Result<(), SessionError> {
        let content = serde_json::to_vec_pretty(session)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::write_atomic(&path, &content))
            .await
            .map_err(|e| SessionError::Io(std::io::Error::other(e)))??;

        debug!(path = %self.path.display(), "Session stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
