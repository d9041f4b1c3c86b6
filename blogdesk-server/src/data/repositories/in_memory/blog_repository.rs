use async_trait::async_trait;
use rand::seq::index;

use super::MemoryDb;
use crate::data::blog_repository::BlogRepository;
use crate::domain::blog::{Blog, BlogDraft};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct InMemoryBlogRepository {
    db: MemoryDb,
}

impl InMemoryBlogRepository {
    pub(crate) fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create_blog(&self, input: BlogDraft) -> Result<Blog, DomainError> {
        let mut tables = self.db.lock()?;
        let blog = Blog::from_draft(tables.next_blog_id, input);
        tables.next_blog_id += 1;
        tables.blogs.push(blog.clone());
        Ok(blog)
    }

    async fn get_blog(&self, id: i64) -> Result<Option<Blog>, DomainError> {
        let tables = self.db.lock()?;
        Ok(tables.blogs.iter().find(|blog| blog.id == id).cloned())
    }

    async fn replace_blog(&self, id: i64, draft: BlogDraft) -> Result<Option<Blog>, DomainError> {
        let mut tables = self.db.lock()?;
        let Some(blog) = tables.blogs.iter_mut().find(|blog| blog.id == id) else {
            return Ok(None);
        };
        blog.replace_with(draft);
        Ok(Some(blog.clone()))
    }

    async fn delete_blog(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.db.lock()?;
        let before = tables.blogs.len();
        tables.blogs.retain(|blog| blog.id != id);
        Ok(tables.blogs.len() != before)
    }

    async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.db.lock()?.blogs.clone())
    }

    async fn sample_blogs(&self, amount: usize) -> Result<Vec<Blog>, DomainError> {
        let tables = self.db.lock()?;
        sample_without_replacement(&tables.blogs, amount)
    }
}

// index::sample отдаёт индексы уже в случайном порядке
fn sample_without_replacement(blogs: &[Blog], amount: usize) -> Result<Vec<Blog>, DomainError> {
    if blogs.len() < amount {
        return Err(DomainError::InsufficientData {
            required: amount,
            available: blogs.len(),
        });
    }

    let mut rng = rand::rng();
    Ok(index::sample(&mut rng, blogs.len(), amount)
        .into_iter()
        .filter_map(|idx| blogs.get(idx).cloned())
        .collect())
}
