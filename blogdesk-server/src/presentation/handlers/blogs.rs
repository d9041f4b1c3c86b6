use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::blog::{Blog, BlogDraft};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::ValidatedJson;
use crate::presentation::handlers::auth::MessageDto;

/// Тело для создания и для полной замены поста.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct BlogInputDto {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: String,
    pub(crate) image: Option<String>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: String,
    pub(crate) image: Option<String>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogMessageResponseDto {
    pub(crate) message: String,
    pub(crate) blog: BlogDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogResponseDto {
    pub(crate) blog: BlogDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BlogsResponseDto {
    pub(crate) blogs: Vec<BlogDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct FeaturedBlogsResponseDto {
    pub(crate) featured_blogs: Vec<BlogDto>,
}

impl From<BlogInputDto> for BlogDraft {
    fn from(dto: BlogInputDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            author: dto.author,
            image: dto.image,
            created_at: dto.created_at,
        }
    }
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            content: blog.content,
            author: blog.author,
            image: blog.image,
            created_at: blog.created_at,
        }
    }
}

fn into_dtos(blogs: Vec<Blog>) -> Vec<BlogDto> {
    blogs.into_iter().map(BlogDto::from).collect()
}

#[utoipa::path(
    post,
    path = "/blogs/",
    tag = "blogs",
    request_body = BlogInputDto,
    responses(
        (status = 200, description = "Blog created", body = BlogMessageResponseDto),
        (status = 422, description = "Validation error")
    )
)]
pub(crate) async fn create_blog(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<BlogInputDto>,
) -> AppResult<(StatusCode, Json<BlogMessageResponseDto>)> {
    let blog = state.blog_service.create_blog(dto.into()).await?;

    Ok((
        StatusCode::OK,
        Json(BlogMessageResponseDto {
            message: "Blog created successfully".to_string(),
            blog: blog.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/blogs/",
    tag = "blogs",
    responses(
        (status = 200, description = "Blogs in insertion order", body = BlogsResponseDto)
    )
)]
pub(crate) async fn list_blogs(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<BlogsResponseDto>)> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok((
        StatusCode::OK,
        Json(BlogsResponseDto {
            blogs: into_dtos(blogs),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    responses(
        (status = 200, description = "Blog found", body = BlogResponseDto),
        (status = 404, description = "Blog not found"),
        (status = 422, description = "Id is not an integer")
    )
)]
pub(crate) async fn get_blog(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<BlogResponseDto>)> {
    let Path(id) = id?;
    let blog = state.blog_service.get_blog(id).await?;

    Ok((StatusCode::OK, Json(BlogResponseDto { blog: blog.into() })))
}

#[utoipa::path(
    put,
    path = "/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    request_body = BlogInputDto,
    responses(
        (status = 200, description = "Blog replaced", body = BlogMessageResponseDto),
        (status = 404, description = "Blog not found"),
        (status = 422, description = "Validation error")
    )
)]
pub(crate) async fn update_blog(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    ValidatedJson(dto): ValidatedJson<BlogInputDto>,
) -> AppResult<(StatusCode, Json<BlogMessageResponseDto>)> {
    let Path(id) = id?;
    let blog = state.blog_service.update_blog(id, dto.into()).await?;

    Ok((
        StatusCode::OK,
        Json(BlogMessageResponseDto {
            message: "Blog updated successfully".to_string(),
            blog: blog.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i64, Path, description = "Blog id")
    ),
    responses(
        (status = 200, description = "Blog deleted (also for unknown ids)", body = MessageDto),
        (status = 422, description = "Id is not an integer")
    )
)]
pub(crate) async fn delete_blog(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    let Path(id) = id?;
    state.blog_service.delete_blog(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Blog deleted successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/featured-blogs/",
    tag = "blogs",
    responses(
        (status = 200, description = "Three random distinct blogs", body = FeaturedBlogsResponseDto),
        (status = 404, description = "Not enough blogs to display")
    )
)]
pub(crate) async fn featured_blogs(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<FeaturedBlogsResponseDto>)> {
    let blogs = state.blog_service.featured_blogs().await?;

    Ok((
        StatusCode::OK,
        Json(FeaturedBlogsResponseDto {
            featured_blogs: into_dtos(blogs),
        }),
    ))
}
