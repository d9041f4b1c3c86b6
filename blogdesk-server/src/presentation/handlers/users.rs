use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::auth::UserDto;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UsersResponseDto {
    pub(crate) users: Vec<UserDto>,
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses(
        (status = 200, description = "Registered users in insertion order", body = UsersResponseDto)
    )
)]
pub(crate) async fn list_users(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<UsersResponseDto>)> {
    let users = state.auth_service.list_users().await?;

    Ok((
        StatusCode::OK,
        Json(UsersResponseDto {
            users: users.into_iter().map(UserDto::from).collect(),
        }),
    ))
}
