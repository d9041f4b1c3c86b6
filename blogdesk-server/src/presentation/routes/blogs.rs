use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::blogs::{
    create_blog, delete_blog, featured_blogs, get_blog, list_blogs, update_blog,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs/", get(list_blogs).post(create_blog))
        .route(
            "/blogs/{id}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route("/featured-blogs/", get(featured_blogs))
}
