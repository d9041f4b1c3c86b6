use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RegisterRequest {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) city: Option<String>,
}

impl RegisterRequest {
    pub(crate) fn normalized(mut self) -> Result<Self, DomainError> {
        self.email = normalize_email(&self.email)?;
        Ok(self)
    }
}

impl From<RegisterRequest> for User {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
            password: req.password,
            city: req.city,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn normalized(mut self) -> Result<Self, DomainError> {
        self.email = normalize_email(&self.email)?;
        Ok(self)
    }

    /// Все четыре поля должны совпасть буквально; email сравнивается после `normalized`.
    pub(crate) fn matches(&self, user: &User) -> bool {
        user.name == self.name
            && user.surname == self.surname
            && user.email == self.email
            && user.password == self.password
    }
}

const INVALID_EMAIL: DomainError = DomainError::Validation {
    field: "email",
    message: "must be a valid email",
};

/// Проверяет адрес и приводит доменную часть к нижнему регистру.
///
/// Локальная часть сохраняет регистр. Домен должен состоять минимум из двух
/// непустых меток (`x@localhost` и `x@[127.0.0.1]` отклоняются).
pub(crate) fn normalize_email(email: &str) -> Result<String, DomainError> {
    if !email.validate_email() {
        return Err(INVALID_EMAIL);
    }
    let (local, domain) = email.rsplit_once('@').ok_or(INVALID_EMAIL)?;

    let labels: Vec<&str> = domain.split('.').collect();
    if domain.starts_with('[') || labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(INVALID_EMAIL);
    }

    Ok(format!("{local}@{}", domain.to_lowercase()))
}
