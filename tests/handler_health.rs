mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = common::create_test_context();
    common::create_test_entry(&ctx.repository, "abc12", "https://example.com").await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state.clone());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "1 entry stored");
    assert_eq!(json["checks"]["visit_queue"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_reports_entry_count() {
    let ctx = common::create_test_context();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state.clone());
    let server = TestServer::new(app).unwrap();

    let empty = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(empty["checks"]["store"]["message"], "0 entries stored");

    common::create_test_entry(&ctx.repository, "abc12", "https://example.com/a").await;
    common::create_test_entry(&ctx.repository, "abc34", "https://example.com/b").await;

    let two = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(two["checks"]["store"]["message"], "2 entries stored");
}
