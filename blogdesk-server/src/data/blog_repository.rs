use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogDraft};
use crate::domain::error::DomainError;

#[async_trait]
pub(crate) trait BlogRepository: Send + Sync {
    async fn create_blog(&self, input: BlogDraft) -> Result<Blog, DomainError>;
    async fn get_blog(&self, id: i64) -> Result<Option<Blog>, DomainError>;
    async fn replace_blog(&self, id: i64, draft: BlogDraft) -> Result<Option<Blog>, DomainError>;
    async fn delete_blog(&self, id: i64) -> Result<bool, DomainError>;
    async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError>;
    /// Fails with `InsufficientData` if fewer than `amount` blogs exist.
    async fn sample_blogs(&self, amount: usize) -> Result<Vec<Blog>, DomainError>;
}
