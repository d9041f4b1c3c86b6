use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use blogdesk_client::{
    Blog, BlogClient, BlogClientError, BlogInput, Credentials, NewUser, User,
};
use clap::{Args, Parser, Subcommand};

const TOKEN_FILE: &str = ".blogdesk_session";
const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";
const SERVER_ENV: &str = "BLOGDESK_HTTP_URL";

#[derive(Debug, Parser)]
#[command(name = "blogdesk-cli", version, about = "CLI клиент для blogdesk-server")]
struct Cli {
    /// Адрес сервера. Если не указан, берётся из BLOGDESK_HTTP_URL.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct IdentityArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    surname: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Debug, Args)]
struct BlogArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    author: String,
    #[arg(long)]
    image: Option<String>,
    #[arg(long)]
    created_at: Option<String>,
}

impl From<BlogArgs> for BlogInput {
    fn from(args: BlogArgs) -> Self {
        Self {
            title: args.title,
            content: args.content,
            author: args.author,
            image: args.image,
            created_at: args.created_at,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация пользователя.
    Register {
        #[command(flatten)]
        identity: IdentityArgs,
        #[arg(long)]
        city: Option<String>,
    },
    /// Вход пользователя. Идентификатор сессии сохраняется в .blogdesk_session.
    Login {
        #[command(flatten)]
        identity: IdentityArgs,
    },
    /// Завершение текущей сессии.
    Logout,
    /// Список пользователей.
    Users,
    /// Создание поста.
    Create {
        #[command(flatten)]
        blog: BlogArgs,
    },
    /// Список постов.
    List,
    /// Получение поста по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Полная замена поста. Не переданные необязательные поля очищаются.
    Update {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        blog: BlogArgs,
    },
    /// Удаление поста.
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Три случайных поста.
    Featured,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let server = resolve_server(cli.server, std::env::var(SERVER_ENV).ok());
    let mut client = BlogClient::new(server).map_err(map_client_error)?;

    if let Some(token) = load_token().context("не удалось прочитать .blogdesk_session")? {
        client.set_token(token);
    }

    match cli.command {
        Command::Register { identity, city } => {
            let user = client
                .register(&NewUser {
                    name: identity.name,
                    surname: identity.surname,
                    email: identity.email,
                    password: identity.password,
                    city,
                })
                .await
                .map_err(map_client_error)?;
            print_user("Регистрация успешна", &user);
        }
        Command::Login { identity } => {
            let token = client
                .login(&Credentials {
                    name: identity.name,
                    surname: identity.surname,
                    email: identity.email,
                    password: identity.password,
                })
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить идентификатор сессии")?;
            println!("Вход выполнен");
            println!("session_id: {token}");
        }
        Command::Logout => {
            client.logout().await.map_err(map_client_error)?;
            remove_token().context("не удалось удалить .blogdesk_session")?;
            println!("Выход выполнен");
        }
        Command::Users => {
            let users = client.list_users().await.map_err(map_client_error)?;
            println!("Пользователей: {}", users.len());
            for user in &users {
                println!(
                    "- {} {} <{}> city={}",
                    user.name,
                    user.surname,
                    user.email,
                    display_optional(user.city.as_deref())
                );
            }
        }
        Command::Create { blog } => {
            let blog = client
                .create_blog(&blog.into())
                .await
                .map_err(map_client_error)?;
            print_blog("Пост создан", &blog);
        }
        Command::List => {
            let blogs = client.list_blogs().await.map_err(map_client_error)?;
            print_list(&format!("Постов: {}", blogs.len()), &blogs);
        }
        Command::Get { id } => {
            let blog = client.get_blog(id).await.map_err(map_client_error)?;
            print_blog("Пост", &blog);
        }
        Command::Update { id, blog } => {
            let blog = client
                .update_blog(id, &blog.into())
                .await
                .map_err(map_client_error)?;
            print_blog("Пост обновлён", &blog);
        }
        Command::Delete { id } => {
            client.delete_blog(id).await.map_err(map_client_error)?;
            println!("Пост удалён: id={id}");
        }
        Command::Featured => {
            let blogs = client.featured_blogs().await.map_err(map_client_error)?;
            print_list("Избранные посты", &blogs);
        }
    }

    Ok(())
}

fn resolve_server(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_token(client: &BlogClient) -> io::Result<()> {
    if let Some(token) = client.get_token() {
        fs::write(TOKEN_FILE, token)?;
    }
    Ok(())
}

fn remove_token() -> io::Result<()> {
    match fs::remove_file(TOKEN_FILE) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::Unauthorized(detail) => format!(
            "требуется авторизация ({detail}): выполните `blogdesk-cli login ...`"
        ),
        BlogClientError::NotFound(detail) => format!("ресурс не найден: {detail}"),
        BlogClientError::InvalidRequest(detail) => format!("некорректный запрос: {detail}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn display_optional(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn print_user(title: &str, user: &User) {
    println!("{title}");
    println!("name: {}", user.name);
    println!("surname: {}", user.surname);
    println!("email: {}", user.email);
    println!("city: {}", display_optional(user.city.as_deref()));
}

fn print_blog(title: &str, blog: &Blog) {
    println!("{title}");
    println!("id: {}", blog.id);
    println!("title: {}", blog.title);
    println!("content: {}", blog.content);
    println!("author: {}", blog.author);
    println!("image: {}", display_optional(blog.image.as_deref()));
    println!("created_at: {}", display_optional(blog.created_at.as_deref()));
}

fn print_list(title: &str, blogs: &[Blog]) {
    println!("{title}");
    for blog in blogs {
        println!("- [{}] {} (author={})", blog.id, blog.title, blog.author);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8000".to_string());
        assert_eq!(s, "https://example.com:8000");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8000".to_string());
        assert_eq!(s, "http://127.0.0.1:8000");
    }

    #[test]
    fn resolve_server_defaults_to_local() {
        assert_eq!(resolve_server(None, None), DEFAULT_SERVER);
    }

    #[test]
    fn resolve_server_prefers_flag_over_env() {
        let server = resolve_server(
            Some("localhost:9999".to_string()),
            Some("http://env:1".to_string()),
        );
        assert_eq!(server, "http://localhost:9999");
    }

    #[test]
    fn resolve_server_falls_back_to_env() {
        let server = resolve_server(None, Some("env-host:8000".to_string()));
        assert_eq!(server, "http://env-host:8000");
    }

    #[test]
    fn parse_token_content_trims_whitespace() {
        let token = parse_token_content("  3f0c2a9e-token  \n");
        assert_eq!(token.as_deref(), Some("3f0c2a9e-token"));
    }

    #[test]
    fn parse_token_content_rejects_blank() {
        let token = parse_token_content("   ");
        assert!(token.is_none());
    }

    #[test]
    fn update_args_drop_missing_optionals() {
        let cli = Cli::try_parse_from([
            "blogdesk-cli",
            "update",
            "--id",
            "4",
            "--title",
            "t",
            "--content",
            "c",
            "--author",
            "a",
        ])
        .expect("args must parse");

        match cli.command {
            Command::Update { id, blog } => {
                assert_eq!(id, 4);
                let input = BlogInput::from(blog);
                assert!(input.image.is_none());
                assert!(input.created_at.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn register_accepts_optional_city() {
        let cli = Cli::try_parse_from([
            "blogdesk-cli",
            "--server",
            "localhost:8000",
            "register",
            "--name",
            "Ann",
            "--surname",
            "Lee",
            "--email",
            "ann@example.com",
            "--password",
            "pw",
        ])
        .expect("args must parse");

        assert_eq!(cli.server.as_deref(), Some("localhost:8000"));
        match cli.command {
            Command::Register { identity, city } => {
                assert_eq!(identity.email, "ann@example.com");
                assert!(city.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
