//! Session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::UserSession;
use crate::domain::errors::SessionError;

/// Port for persisting the signed-in user's session.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Loads stored session.
    async fn load(&self) -> Result<Option<UserSession>, SessionError>;

    /// Stores session.
    async fn store(&self, session: &UserSession) -> Result<(), SessionError>;

    /// Removes stored session.
    async fn clear(&self) -> Result<(), SessionError>;
}
