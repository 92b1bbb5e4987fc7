mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::health_handler;
use url_shortener::application::services::CreateShortUrl;

#[tokio::test]
async fn test_health_reports_store_and_queue() {
    let ctx = common::create_test_state();
    ctx.state
        .registry
        .create(CreateShortUrl {
            url: Some("https://example.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state.clone());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "1 short URLs");
    assert_eq!(json["checks"]["event_log_queue"]["status"], "ok");
    assert_eq!(
        json["checks"]["event_log_queue"]["message"],
        "256 of 256 slots free"
    );
}

#[tokio::test]
async fn test_health_reports_queued_events_as_used_slots() {
    let ctx = common::create_test_state();
    ctx.state
        .event_logger
        .log("backend", "info", "handler", "pending")
        .unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state.clone());
    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(
        json["checks"]["event_log_queue"]["message"],
        "255 of 256 slots free"
    );
}

#[tokio::test]
async fn test_health_degraded_when_event_log_worker_gone() {
    let ctx = common::create_test_state();
    let state = ctx.state.clone();
    drop(ctx);

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["event_log_queue"]["status"], "error");
}
