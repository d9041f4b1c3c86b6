use axum::Router;

use super::AppState;

pub(crate) mod auth;
pub(crate) mod blogs;
pub(crate) mod users;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(blogs::router())
}
