use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::{LoginRequest, RegisterRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::middleware::auth::CurrentSession;

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct RegisterDto {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) city: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct LoginDto {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) city: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct RegisterResponseDto {
    pub(crate) message: String,
    pub(crate) user: UserDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LoginResponseDto {
    pub(crate) success: bool,
    pub(crate) message: String,
    pub(crate) session_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct MessageDto {
    pub(crate) message: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            surname: user.surname,
            email: user.email,
            password: user.password,
            city: user.city,
        }
    }
}

#[utoipa::path(
    post,
    path = "/register/",
    tag = "auth",
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Registered successfully", body = RegisterResponseDto),
        (status = 400, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RegisterResponseDto>)> {
    // формат email проверяется в домене вместе с нормализацией
    let Json(dto) = body?;
    let req = RegisterRequest {
        name: dto.name,
        surname: dto.surname,
        email: dto.email,
        password: dto.password,
        city: dto.city,
    };

    let user = state.auth_service.register(req).await?;

    Ok((
        StatusCode::OK,
        Json(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login/",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<LoginResponseDto>)> {
    let Json(dto) = body?;
    let req = LoginRequest {
        name: dto.name,
        surname: dto.surname,
        email: dto.email,
        password: dto.password,
    };

    let session = state.auth_service.login(req).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            success: true,
            message: "Login successful".to_string(),
            session_id: session.token,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/logout/",
    tag = "auth",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Logout successful", body = MessageDto),
        (status = 401, description = "Invalid session")
    )
)]
pub(crate) async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.auth_service.logout(&session).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout successful".to_string(),
        }),
    ))
}
