mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::DateTime;
use serde_json::{Value, json};
use tiny_shortener::routes::router;

#[tokio::test]
async fn test_stats_success() {
    let db = common::create_test_db().await;
    common::create_test_link(&db.pool, "abc123", "https://example.com", 7).await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server.get("/stats/abc123").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["code"], "abc123");
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["clicks"], 7);

    let created_at = body["created_at"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());

    assert_eq!(body.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_stats_does_not_count_clicks() {
    let db = common::create_test_db().await;
    common::create_test_link(&db.pool, "abc123", "https://example.com", 2).await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let first: Value = server.get("/stats/abc123").await.json();
    let second: Value = server.get("/stats/abc123").await.json();

    assert_eq!(first, second);
    assert_eq!(first["clicks"], 2);
    assert_eq!(common::get_clicks(&db.pool, "abc123").await, 2);
}

#[tokio::test]
async fn test_stats_reflects_redirects() {
    let db = common::create_test_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "custom": "tracked" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = server.get("/stats/tracked").await.json();
    assert_eq!(body["clicks"], 0);

    server.get("/tracked").await;
    server.get("/tracked").await;

    let body: Value = server.get("/stats/tracked").await.json();
    assert_eq!(body["clicks"], 2);
    assert_eq!(body["url"], "https://example.com");
}

#[tokio::test]
async fn test_stats_not_found() {
    let db = common::create_test_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server.get("/stats/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Not found" }));
}
