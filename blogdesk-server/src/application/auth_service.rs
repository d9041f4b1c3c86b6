use tracing::{debug, info};

use crate::data::session_repository::SessionRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::session::{Session, parse_bearer};
use crate::domain::user::{LoginRequest, RegisterRequest, User};

pub(crate) struct AuthService<U: UserRepository, S: SessionRepository> {
    users: U,
    sessions: S,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    pub(crate) fn new(users: U, sessions: S) -> Self {
        Self { users, sessions }
    }

    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<User, DomainError> {
        let req = req.normalized()?;
        let user = self.users.create_user(User::from(req)).await?;
        info!("user registered");
        Ok(user)
    }

    pub(crate) async fn login(&self, req: LoginRequest) -> Result<Session, DomainError> {
        let req = req.normalized()?;

        let Some(user) = self.users.find_match(&req).await? else {
            debug!(email = %req.email, "login rejected");
            return Err(DomainError::InvalidCredentials);
        };

        let session = self.sessions.create_session(user).await?;
        info!("session opened");
        Ok(session)
    }

    /// Возвращает снимок пользователя для заголовка `Authorization`.
    pub(crate) async fn resolve_session(
        &self,
        authorization: Option<&str>,
    ) -> Result<Session, DomainError> {
        let token = parse_bearer(authorization)?;
        let user = self
            .sessions
            .find_session(token)
            .await?
            .ok_or(DomainError::InvalidSession)?;

        Ok(Session {
            token: token.to_string(),
            user,
        })
    }

    pub(crate) async fn logout(&self, session: &Session) -> Result<(), DomainError> {
        if !self.sessions.delete_session(&session.token).await? {
            return Err(DomainError::InvalidSession);
        }
        info!("session closed");
        Ok(())
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.list_users().await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::AuthService;
    use crate::data::session_repository::SessionRepository;
    use crate::data::user_repository::UserRepository;
    use crate::domain::error::DomainError;
    use crate::domain::session::Session;
    use crate::domain::user::{LoginRequest, RegisterRequest, User};

    #[derive(Clone, Default)]
    struct FakeUserRepo {
        users: Arc<Mutex<Vec<User>>>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_user(&self, input: User) -> Result<User, DomainError> {
            let mut users = self.users.lock().expect("users mutex poisoned");
            if users.iter().any(|user| user.email == input.email) {
                return Err(DomainError::DuplicateEmail);
            }
            users.push(input.clone());
            Ok(input)
        }

        async fn find_match(
            &self,
            credentials: &LoginRequest,
        ) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .expect("users mutex poisoned")
                .iter()
                .find(|user| credentials.matches(user))
                .cloned())
        }

        async fn list_users(&self) -> Result<Vec<User>, DomainError> {
            Ok(self.users.lock().expect("users mutex poisoned").clone())
        }
    }

    #[derive(Clone, Default)]
    struct FakeSessionRepo {
        sessions: Arc<Mutex<HashMap<String, User>>>,
        issued: Arc<Mutex<u32>>,
    }

    #[async_trait]
    impl SessionRepository for FakeSessionRepo {
        async fn create_session(&self, user: User) -> Result<Session, DomainError> {
            let mut issued = self.issued.lock().expect("issued mutex poisoned");
            *issued += 1;
            let token = format!("token-{}", *issued);
            self.sessions
                .lock()
                .expect("sessions mutex poisoned")
                .insert(token.clone(), user.clone());
            Ok(Session { token, user })
        }

        async fn find_session(&self, token: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .sessions
                .lock()
                .expect("sessions mutex poisoned")
                .get(token)
                .cloned())
        }

        async fn delete_session(&self, token: &str) -> Result<bool, DomainError> {
            Ok(self
                .sessions
                .lock()
                .expect("sessions mutex poisoned")
                .remove(token)
                .is_some())
        }
    }

    fn service() -> AuthService<FakeUserRepo, FakeSessionRepo> {
        AuthService::new(FakeUserRepo::default(), FakeSessionRepo::default())
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            email: email.to_string(),
            password: "plain-password".to_string(),
            city: None,
        }
    }

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest {
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_stores_password_as_is() {
        let service = service();
        let user = service
            .register(register_request("jane@example.com"))
            .await
            .expect("register must succeed");

        assert_eq!(user.password, "plain-password");
        assert_eq!(service.list_users().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let service = service();
        service
            .register(register_request("jane@example.com"))
            .await
            .expect("first register must succeed");

        let err = service
            .register(register_request("jane@example.com"))
            .await
            .expect_err("second register must fail");
        assert!(matches!(err, DomainError::DuplicateEmail));
    }

    #[tokio::test]
    async fn register_rejects_invalid_email_before_repo_call() {
        let service = service();
        let err = service
            .register(register_request("jane.example.com"))
            .await
            .expect_err("invalid email must fail");

        assert!(matches!(err, DomainError::Validation { field: "email", .. }));
        assert!(service.list_users().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn login_returns_invalid_credentials_for_wrong_password() {
        let service = service();
        service
            .register(register_request("jane@example.com"))
            .await
            .expect("register must succeed");

        let err = service
            .login(login_request("wrong"))
            .await
            .expect_err("login must fail");
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_twice_yields_distinct_tokens() {
        let service = service();
        service
            .register(register_request("jane@example.com"))
            .await
            .expect("register must succeed");

        let first = service
            .login(login_request("plain-password"))
            .await
            .expect("login must succeed");
        let second = service
            .login(login_request("plain-password"))
            .await
            .expect("login must succeed");

        assert_ne!(first.token, second.token);
        assert_eq!(first.user, second.user);
    }

    #[tokio::test]
    async fn resolve_session_requires_known_bearer_token() {
        let service = service();
        service
            .register(register_request("jane@example.com"))
            .await
            .expect("register must succeed");
        let session = service
            .login(login_request("plain-password"))
            .await
            .expect("login must succeed");

        let header = format!("Bearer {}", session.token);
        let resolved = service
            .resolve_session(Some(&header))
            .await
            .expect("session must resolve");
        assert_eq!(resolved.user.email, "jane@example.com");

        let err = service
            .resolve_session(Some("Bearer unknown"))
            .await
            .expect_err("unknown token must fail");
        assert!(matches!(err, DomainError::InvalidSession));

        let err = service
            .resolve_session(None)
            .await
            .expect_err("missing header must fail");
        assert!(matches!(err, DomainError::InvalidSession));
    }

    #[tokio::test]
    async fn logout_removes_session_once() {
        let service = service();
        service
            .register(register_request("jane@example.com"))
            .await
            .expect("register must succeed");
        let session = service
            .login(login_request("plain-password"))
            .await
            .expect("login must succeed");

        service.logout(&session).await.expect("logout must succeed");

        let err = service
            .logout(&session)
            .await
            .expect_err("second logout must fail");
        assert!(matches!(err, DomainError::InvalidSession));
    }
}
