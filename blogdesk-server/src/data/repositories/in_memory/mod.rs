use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::blog::Blog;
use crate::domain::error::DomainError;
use crate::domain::user::User;

pub(crate) mod blog_repository;
pub(crate) mod session_repository;
pub(crate) mod user_repository;

/// Общее состояние всех in-memory хранилищ под одним мьютексом.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryDb {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: Vec<User>,
    pub(crate) sessions: HashMap<String, User>,
    pub(crate) blogs: Vec<Blog>,
    pub(crate) next_blog_id: i64,
}

impl MemoryDb {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Tables>, DomainError> {
        self.tables
            .lock()
            .map_err(|_| DomainError::Unexpected("in-memory store lock poisoned".to_string()))
    }
}
