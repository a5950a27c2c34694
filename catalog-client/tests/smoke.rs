use catalog_client::{CatalogClient, ClientConfig, DEFAULT_API_URL};

fn client() -> CatalogClient {
    let base_url =
        std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    CatalogClient::new(ClientConfig {
        base_url,
        ..ClientConfig::default()
    })
    .expect("client must build")
}

#[tokio::test]
#[ignore = "requires network access"]
async fn users_smoke_flow() {
    let users = client()
        .list_users(None)
        .await
        .expect("list_users must succeed");

    assert!(!users.is_empty());
    assert!(users.iter().all(|user| user.id > 0));
    assert!(users.iter().any(|user| !user.address.geo.lat.is_empty()));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn posts_smoke_flow() {
    let posts = client()
        .list_posts(Some(5))
        .await
        .expect("list_posts must succeed");

    assert_eq!(posts.len(), 5);
    assert!(posts.iter().all(|post| !post.title.is_empty()));
}
