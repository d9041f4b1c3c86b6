use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::blog_service::BlogService;
use crate::data::repositories::in_memory::MemoryDb;
use crate::data::repositories::in_memory::blog_repository::InMemoryBlogRepository;
use crate::data::repositories::in_memory::session_repository::InMemorySessionRepository;
use crate::data::repositories::in_memory::user_repository::InMemoryUserRepository;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

pub(crate) type AppAuthService = AuthService<InMemoryUserRepository, InMemorySessionRepository>;
pub(crate) type AppBlogService = BlogService<InMemoryBlogRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AppAuthService>,
    pub(crate) blog_service: Arc<AppBlogService>,
}

impl AppState {
    pub(crate) fn new(auth_service: Arc<AppAuthService>, blog_service: Arc<AppBlogService>) -> Self {
        Self {
            auth_service,
            blog_service,
        }
    }

    pub(crate) fn in_memory(db: MemoryDb) -> Self {
        let auth_service = AuthService::new(
            InMemoryUserRepository::new(db.clone()),
            InMemorySessionRepository::new(db.clone()),
        );
        let blog_service = BlogService::new(InMemoryBlogRepository::new(db));

        Self::new(Arc::new(auth_service), Arc::new(blog_service))
    }
}
