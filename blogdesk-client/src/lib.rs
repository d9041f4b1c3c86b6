//! Клиентская библиотека для работы с blogdesk-server по HTTP.
//!
//! Предоставляет `BlogClient` поверх `reqwest`. Клиент хранит идентификатор
//! сессии после `login` и передаёт его в `logout` как `Bearer`-токен.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use http_client::HttpClient;
pub use models::{Blog, BlogInput, Credentials, NewUser, User};

#[derive(Debug, Clone)]
/// Клиент блог-сервиса с сохранённой сессией.
pub struct BlogClient {
    http_client: HttpClient,
    token: Option<String>,
}

impl BlogClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
            token: None,
        })
    }

    /// Устанавливает идентификатор сессии вручную.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Возвращает текущий идентификатор сессии, если он установлен.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Очищает сохранённый идентификатор сессии.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Регистрирует пользователя. Сессию не открывает.
    pub async fn register(&self, user: &NewUser) -> BlogClientResult<User> {
        self.http_client.register(user).await
    }

    /// Выполняет вход и сохраняет полученный идентификатор сессии в клиенте.
    pub async fn login(&mut self, credentials: &Credentials) -> BlogClientResult<String> {
        let token = self.http_client.login(credentials).await?;
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Завершает текущую сессию и очищает токен.
    ///
    /// Без сохранённого токена возвращает `Unauthorized`, не обращаясь к серверу.
    pub async fn logout(&mut self) -> BlogClientResult<()> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| BlogClientError::Unauthorized("no active session".to_string()))?;
        self.http_client.logout(token).await?;
        self.token = None;
        Ok(())
    }

    /// Возвращает всех зарегистрированных пользователей.
    pub async fn list_users(&self) -> BlogClientResult<Vec<User>> {
        self.http_client.list_users().await
    }

    /// Создаёт пост.
    pub async fn create_blog(&self, input: &BlogInput) -> BlogClientResult<Blog> {
        self.http_client.create_blog(input).await
    }

    /// Возвращает все посты.
    pub async fn list_blogs(&self) -> BlogClientResult<Vec<Blog>> {
        self.http_client.list_blogs().await
    }

    /// Получает пост по идентификатору.
    pub async fn get_blog(&self, id: i64) -> BlogClientResult<Blog> {
        self.http_client.get_blog(id).await
    }

    /// Полностью заменяет пост.
    pub async fn update_blog(&self, id: i64, input: &BlogInput) -> BlogClientResult<Blog> {
        self.http_client.update_blog(id, input).await
    }

    /// Удаляет пост.
    pub async fn delete_blog(&self, id: i64) -> BlogClientResult<()> {
        self.http_client.delete_blog(id).await
    }

    /// Возвращает подборку из трёх случайных постов.
    pub async fn featured_blogs(&self) -> BlogClientResult<Vec<Blog>> {
        self.http_client.featured_blogs().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_can_be_set_and_cleared() {
        let mut client = BlogClient::new("http://127.0.0.1:8000").expect("client must build");
        assert!(client.get_token().is_none());

        client.set_token("abc");
        assert_eq!(client.get_token(), Some("abc"));

        client.clear_token();
        assert!(client.get_token().is_none());
    }

    #[tokio::test]
    async fn logout_without_token_fails_locally() {
        let mut client = BlogClient::new("http://127.0.0.1:9").expect("client must build");
        let err = client.logout().await.expect_err("must fail without token");
        assert!(matches!(err, BlogClientError::Unauthorized(_)));
    }
}
