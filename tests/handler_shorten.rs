mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use url_shortener::api::handlers::shorten_handler;
use url_shortener::domain::repositories::EntryRepository;

fn app(ctx: &common::TestContext) -> TestServer {
    let router = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(ctx.state.clone());

    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn test_shorten_creates_link() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let response = server
        .post("/api/shorten")
        .text("https://example.com/a")
        .await;

    response.assert_status(StatusCode::CREATED);

    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert!(location.starts_with("http://localhost:8888/r/"));

    let id = location.trim_start_matches("http://localhost:8888/r/");
    assert_eq!(id.len(), 5);

    let link = response.header("link");
    assert_eq!(
        link,
        format!("<http://localhost:8888/api/stats/{}>; rel=\"stats\"", id).as_str()
    );

    let entry = ctx.repository.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(entry.destination, "https://example.com/a");
}

#[tokio::test]
async fn test_shorten_same_destination_returns_existing() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let first = server
        .post("/api/shorten")
        .text("https://example.com/a")
        .await;
    first.assert_status(StatusCode::CREATED);

    let second = server
        .post("/api/shorten")
        .text("https://example.com/a")
        .await;
    second.assert_status_ok();

    assert_eq!(first.header("location"), second.header("location"));
    assert_eq!(ctx.repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_distinct_destinations_get_distinct_ids() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let a = server
        .post("/api/shorten")
        .text("https://example.com/a")
        .await;
    let b = server
        .post("/api/shorten")
        .text("https://example.com/b")
        .await;

    a.assert_status(StatusCode::CREATED);
    b.assert_status(StatusCode::CREATED);
    assert_ne!(a.header("location"), b.header("location"));
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let response = server.post("/api/shorten").text("not a url").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(ctx.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_empty_body() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let response = server.post("/api/shorten").text("").await;

    response.assert_status_bad_request();
    assert_eq!(ctx.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_get() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let response = server.get("/api/shorten").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.header("allow").to_str().unwrap().contains("POST"));
}

#[tokio::test]
async fn test_shorten_rejects_whitespace_padded_url() {
    let ctx = common::create_test_context();
    let server = app(&ctx);

    let padded = server
        .post("/api/shorten")
        .text(" https://example.com/a ")
        .await;
    padded.assert_status_bad_request();
    assert_eq!(ctx.repository.count().await.unwrap(), 0);

    let exact = server
        .post("/api/shorten")
        .text("https://example.com/a")
        .await;
    exact.assert_status(StatusCode::CREATED);
    assert_eq!(ctx.repository.count().await.unwrap(), 1);
}
