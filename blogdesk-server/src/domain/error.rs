use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid session")]
    InvalidSession,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Not enough blogs to display")]
    InsufficientData { required: usize, available: usize },

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
