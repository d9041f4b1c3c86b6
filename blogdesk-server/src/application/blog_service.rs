use tracing::info;

use crate::data::blog_repository::BlogRepository;
use crate::domain::blog::{Blog, BlogDraft};
use crate::domain::error::DomainError;

pub(crate) const FEATURED_BLOGS_COUNT: usize = 3;

pub(crate) struct BlogService<R: BlogRepository> {
    repo: R,
}

impl<R: BlogRepository> BlogService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_blog(&self, draft: BlogDraft) -> Result<Blog, DomainError> {
        let blog = self.repo.create_blog(draft).await?;
        info!(blog_id = blog.id, "blog created");
        Ok(blog)
    }

    pub(crate) async fn list_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo.list_blogs().await
    }

    pub(crate) async fn get_blog(&self, id: i64) -> Result<Blog, DomainError> {
        self.repo
            .get_blog(id)
            .await?
            .ok_or(DomainError::NotFound("Blog"))
    }

    pub(crate) async fn update_blog(&self, id: i64, draft: BlogDraft) -> Result<Blog, DomainError> {
        let blog = self
            .repo
            .replace_blog(id, draft)
            .await?
            .ok_or(DomainError::NotFound("Blog"))?;
        info!(blog_id = id, "blog updated");
        Ok(blog)
    }

    /// Удаление идемпотентно: отсутствующий id не считается ошибкой.
    pub(crate) async fn delete_blog(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.repo.delete_blog(id).await?;
        info!(blog_id = id, deleted, "blog delete requested");
        Ok(())
    }

    pub(crate) async fn featured_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo.sample_blogs(FEATURED_BLOGS_COUNT).await
    }
}
