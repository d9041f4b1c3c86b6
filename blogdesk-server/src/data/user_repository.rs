use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, User};

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    /// Fails with `DuplicateEmail` if the email is already taken.
    async fn create_user(&self, input: User) -> Result<User, DomainError>;
    async fn find_match(&self, credentials: &LoginRequest) -> Result<Option<User>, DomainError>;
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
}
