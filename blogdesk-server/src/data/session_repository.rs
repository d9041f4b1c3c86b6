use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::session::Session;
use crate::domain::user::User;

#[async_trait]
pub(crate) trait SessionRepository: Send + Sync {
    async fn create_session(&self, user: User) -> Result<Session, DomainError>;
    async fn find_session(&self, token: &str) -> Result<Option<User>, DomainError>;
    /// Returns `false` if the token was not known.
    async fn delete_session(&self, token: &str) -> Result<bool, DomainError>;
}
