use std::time::{SystemTime, UNIX_EPOCH};

use blogdesk_client::{BlogClient, BlogClientError, BlogInput, Credentials, NewUser};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("BLOGDESK_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let mut client = BlogClient::new(base_url).expect("client must build");

    let suffix = unique_suffix();
    let email = format!("user_{suffix}@example.com");
    let new_user = NewUser {
        name: "Smoke".to_string(),
        surname: "Test".to_string(),
        email: email.clone(),
        password: "password123".to_string(),
        city: None,
    };

    let registered = client
        .register(&new_user)
        .await
        .expect("register must succeed");
    assert_eq!(registered.email, email);

    let duplicate = client.register(&new_user).await;
    assert!(matches!(duplicate, Err(BlogClientError::InvalidRequest(_))));

    let credentials = Credentials {
        name: "Smoke".to_string(),
        surname: "Test".to_string(),
        email,
        password: "password123".to_string(),
    };
    let token = client.login(&credentials).await.expect("login must succeed");
    assert!(!token.is_empty());
    assert_eq!(client.get_token(), Some(token.as_str()));

    let created = client
        .create_blog(&BlogInput {
            title: "smoke title".to_string(),
            content: "smoke content".to_string(),
            author: "Smoke Test".to_string(),
            image: Some("cover.png".to_string()),
            created_at: None,
        })
        .await
        .expect("create_blog must succeed");

    let fetched = client
        .get_blog(created.id)
        .await
        .expect("get_blog must succeed");
    assert_eq!(fetched, created);

    let listed = client.list_blogs().await.expect("list_blogs must succeed");
    assert!(listed.iter().any(|blog| blog.id == created.id));

    let updated = client
        .update_blog(
            created.id,
            &BlogInput {
                title: "smoke title updated".to_string(),
                content: "smoke content".to_string(),
                author: "Smoke Test".to_string(),
                ..BlogInput::default()
            },
        )
        .await
        .expect("update_blog must succeed");
    assert_eq!(updated.id, created.id);
    assert!(updated.image.is_none());

    client
        .delete_blog(created.id)
        .await
        .expect("delete_blog must succeed");
    client
        .delete_blog(created.id)
        .await
        .expect("repeated delete must succeed");

    let after_delete = client.get_blog(created.id).await;
    assert!(matches!(after_delete, Err(BlogClientError::NotFound(_))));

    client.logout().await.expect("logout must succeed");
    assert!(client.get_token().is_none());

    client.set_token(token);
    let again = client.logout().await;
    assert!(matches!(again, Err(BlogClientError::Unauthorized(_))));
}
