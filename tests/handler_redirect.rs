mod common;

use axum::http::StatusCode;
use serde_json::json;
use slugline::infrastructure::cache::CacheService;
use slugline::infrastructure::persistence::InMemoryLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_after_create() {
    let (state, cache) = common::create_test_state();
    let server = common::create_server(state);

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "http://example.com" }))
        .await
        .json::<serde_json::Value>();
    let slug = created["slug"].as_str().unwrap().to_string();
    assert!(!slug.is_empty());

    let response = server.get(&format!("/{}", slug)).await;

    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "http://example.com");

    assert_eq!(
        cache.get_url(&slug).await.unwrap().as_deref(),
        Some("http://example.com")
    );
}

#[tokio::test]
async fn test_redirect_serves_cached_url() {
    let (state, cache) = common::create_test_state();
    let server = common::create_server(state);

    cache
        .set_url("go", "https://cached.example.com", None)
        .await
        .unwrap();

    let response = server.get("/go").await;

    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "https://cached.example.com");
}

#[tokio::test]
async fn test_redirect_malformed_slug() {
    let (state, _cache) = common::create_test_state();
    let server = common::create_server(state);

    let response = server.get("/x!z").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_redirect_missing_link() {
    let (state, _cache) = common::create_test_state();
    let server = common::create_server(state);

    let response = server.get("/xyz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_store_unavailable_is_not_found() {
    let server = common::create_server(common::create_unavailable_state());

    let response = server.get("/go").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_wrong_method() {
    let (state, _cache) = common::create_test_state();
    let server = common::create_server(state);

    let response = server.post("/xyz").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_redirect_url_with_control_characters() {
    let state = common::create_state_with(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(slugline::infrastructure::cache::InMemoryCache::new()),
    );
    let server = common::create_server(state);

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "http://example.com/a\nb" }))
        .await
        .json::<serde_json::Value>();
    let slug = created["slug"].as_str().unwrap().to_string();

    let response = server.get(&format!("/{}", slug)).await;

    response.assert_status_internal_server_error();
}
