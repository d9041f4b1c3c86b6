use async_trait::async_trait;

use super::MemoryDb;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, User};

#[derive(Debug, Clone)]
pub(crate) struct InMemoryUserRepository {
    db: MemoryDb,
}

impl InMemoryUserRepository {
    pub(crate) fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, input: User) -> Result<User, DomainError> {
        let mut tables = self.db.lock()?;
        if tables.users.iter().any(|user| user.email == input.email) {
            return Err(DomainError::DuplicateEmail);
        }
        tables.users.push(input.clone());
        Ok(input)
    }

    async fn find_match(&self, credentials: &LoginRequest) -> Result<Option<User>, DomainError> {
        let tables = self.db.lock()?;
        Ok(tables
            .users
            .iter()
            .find(|user| credentials.matches(user))
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.db.lock()?.users.clone())
    }
}
