use async_trait::async_trait;
use uuid::Uuid;

use super::MemoryDb;
use crate::data::session_repository::SessionRepository;
use crate::domain::error::DomainError;
use crate::domain::session::Session;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct InMemorySessionRepository {
    db: MemoryDb,
}

impl InMemorySessionRepository {
    pub(crate) fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self, user: User) -> Result<Session, DomainError> {
        let mut tables = self.db.lock()?;
        let token = loop {
            let candidate = Uuid::new_v4().to_string();
            if !tables.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        tables.sessions.insert(token.clone(), user.clone());
        Ok(Session { token, user })
    }

    async fn find_session(&self, token: &str) -> Result<Option<User>, DomainError> {
        Ok(self.db.lock()?.sessions.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.db.lock()?.sessions.remove(token).is_some())
    }
}
