use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::domain::session::Session;
use crate::presentation::AppState;
use crate::presentation::app_error::AppError;

/// Сессия из заголовка `Authorization: Bearer <token>`; иначе `InvalidSession` (401).
#[derive(Debug, Clone)]
pub(crate) struct CurrentSession(pub(crate) Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let session = state.auth_service.resolve_session(authorization).await?;
        Ok(Self(session))
    }
}
