use reqwest::{Client, Method, RequestBuilder};
use serde::{
    Deserialize,
    de::{DeserializeOwned, IgnoredAny},
};
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Blog, BlogInput, Credentials, NewUser, User};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegisterResponseDto {
    user: User,
}

#[derive(Debug, Deserialize)]
struct LoginResponseDto {
    success: bool,
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct UsersResponseDto {
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct BlogResponseDto {
    blog: Blog,
}

#[derive(Debug, Deserialize)]
struct BlogsResponseDto {
    blogs: Vec<Blog>,
}

#[derive(Debug, Deserialize)]
struct FeaturedBlogsResponseDto {
    featured_blogs: Vec<Blog>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API `blogdesk-server`.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.endpoint(path))
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .detail
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        BlogClientError::from_http_status(status, Some(message))
    }

    /// отправляет запрос и разбирает json-ответ либо тело ошибки
    async fn execute<TRes>(request: RequestBuilder) -> BlogClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    /// Регистрирует пользователя и возвращает сохранённую запись.
    pub async fn register(&self, user: &NewUser) -> BlogClientResult<User> {
        let dto: RegisterResponseDto =
            Self::execute(self.request(Method::POST, "/register/").json(user)).await?;
        Ok(dto.user)
    }

    /// Выполняет вход и возвращает идентификатор сессии.
    pub async fn login(&self, credentials: &Credentials) -> BlogClientResult<String> {
        let dto: LoginResponseDto =
            Self::execute(self.request(Method::POST, "/login/").json(credentials)).await?;
        if !dto.success {
            return Err(BlogClientError::Unauthorized(
                "login was not successful".to_string(),
            ));
        }
        Ok(dto.session_id)
    }

    /// Завершает сессию с указанным токеном.
    pub async fn logout(&self, token: &str) -> BlogClientResult<()> {
        let _: IgnoredAny =
            Self::execute(self.request(Method::POST, "/logout/").bearer_auth(token)).await?;
        Ok(())
    }

    /// Возвращает всех зарегистрированных пользователей.
    pub async fn list_users(&self) -> BlogClientResult<Vec<User>> {
        let dto: UsersResponseDto = Self::execute(self.request(Method::GET, "/users/")).await?;
        Ok(dto.users)
    }

    /// Создаёт пост.
    pub async fn create_blog(&self, input: &BlogInput) -> BlogClientResult<Blog> {
        let dto: BlogResponseDto =
            Self::execute(self.request(Method::POST, "/blogs/").json(input)).await?;
        Ok(dto.blog)
    }

    /// Возвращает все посты в порядке создания.
    pub async fn list_blogs(&self) -> BlogClientResult<Vec<Blog>> {
        let dto: BlogsResponseDto = Self::execute(self.request(Method::GET, "/blogs/")).await?;
        Ok(dto.blogs)
    }

    /// Получает пост по идентификатору.
    pub async fn get_blog(&self, id: i64) -> BlogClientResult<Blog> {
        let dto: BlogResponseDto =
            Self::execute(self.request(Method::GET, &format!("/blogs/{id}"))).await?;
        Ok(dto.blog)
    }

    /// Полностью заменяет пост по идентификатору.
    pub async fn update_blog(&self, id: i64, input: &BlogInput) -> BlogClientResult<Blog> {
        let dto: BlogResponseDto =
            Self::execute(self.request(Method::PUT, &format!("/blogs/{id}")).json(input)).await?;
        Ok(dto.blog)
    }

    /// Удаляет пост. Сервер отвечает успехом и для несуществующего id.
    pub async fn delete_blog(&self, id: i64) -> BlogClientResult<()> {
        let _: IgnoredAny =
            Self::execute(self.request(Method::DELETE, &format!("/blogs/{id}"))).await?;
        Ok(())
    }

    /// Возвращает три случайных поста.
    pub async fn featured_blogs(&self) -> BlogClientResult<Vec<Blog>> {
        let dto: FeaturedBlogsResponseDto =
            Self::execute(self.request(Method::GET, "/featured-blogs/")).await?;
        Ok(dto.featured_blogs)
    }
}
