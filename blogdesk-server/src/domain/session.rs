use super::error::DomainError;
use super::user::User;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) token: String,
    pub(crate) user: User,
}

/// Достаёт токен из заголовка вида `Bearer <token>`.
pub(crate) fn parse_bearer(header: Option<&str>) -> Result<&str, DomainError> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(DomainError::InvalidSession)?;

    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidSession);
    }
    Ok(token)
}
