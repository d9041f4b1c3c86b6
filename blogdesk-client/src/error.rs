use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blogdesk-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сессия отсутствует, неизвестна или неверны учётные данные.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Запрошенный ресурс не найден (или постов недостаточно для подборки).
    #[error("not found: {0}")]
    NotFound(String),

    /// Некорректный запрос или бизнес-ошибка валидации.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `blogdesk-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized(message)
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::InvalidRequest(message),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}
