use crate::domain::error::DomainError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("invalid path: {0}")]
    Path(#[from] PathRejection),

    #[error("request timed out")]
    Timeout,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct FieldError {
    field: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail, errors) = match self {
            AppError::Domain(err) => match &err {
                DomainError::Validation { field, message } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "validation failed".to_string(),
                    vec![FieldError {
                        field: field.to_string(),
                        message: message.to_string(),
                    }],
                ),
                DomainError::DuplicateEmail => (StatusCode::BAD_REQUEST, err.to_string(), vec![]),
                DomainError::InvalidCredentials | DomainError::InvalidSession => {
                    (StatusCode::UNAUTHORIZED, err.to_string(), vec![])
                }
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string(), vec![]),
                DomainError::InsufficientData {
                    required,
                    available,
                } => {
                    debug!(required, available, "not enough blogs for sample");
                    (StatusCode::NOT_FOUND, err.to_string(), vec![])
                }
                DomainError::Unexpected(reason) => {
                    error!(%reason, "unexpected domain error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal error".to_string(),
                        vec![],
                    )
                }
            },
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation failed".to_string(),
                field_errors(&err),
            ),
            AppError::Body(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.body_text(),
                vec![],
            ),
            AppError::Path(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.body_text(),
                vec![],
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "request timed out".to_string(),
                vec![],
            ),
            AppError::Internal(err) => {
                error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                    vec![],
                )
            }
        };

        (status, Json(ErrorBody { detail, errors })).into_response()
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}
