use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Пользователь в том виде, в каком его возвращает сервер.
pub struct User {
    /// Имя.
    pub name: String,
    /// Фамилия.
    pub surname: String,
    /// Email, уникальный ключ пользователя.
    pub email: String,
    /// Пароль (сервер хранит и возвращает его как есть).
    pub password: String,
    /// Город, если указан при регистрации.
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Данные для регистрации.
pub struct NewUser {
    /// Имя.
    pub name: String,
    /// Фамилия.
    pub surname: String,
    /// Email.
    pub email: String,
    /// Пароль.
    pub password: String,
    /// Город (необязательно).
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Учётные данные для входа: должны совпасть все четыре поля.
pub struct Credentials {
    /// Имя.
    pub name: String,
    /// Фамилия.
    pub surname: String,
    /// Email.
    pub email: String,
    /// Пароль.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Blog {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    pub content: String,
    /// Автор (произвольная строка).
    pub author: String,
    /// Ссылка на изображение.
    pub image: Option<String>,
    /// Дата создания в свободном формате; сервер её не заполняет.
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Тело для создания поста и для его полной замены.
///
/// При обновлении не переданные опциональные поля сбрасываются в `None`.
pub struct BlogInput {
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    pub content: String,
    /// Автор.
    pub author: String,
    /// Ссылка на изображение.
    pub image: Option<String>,
    /// Дата создания.
    pub created_at: Option<String>,
}
