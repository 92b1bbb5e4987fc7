mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::Duration;
use serde_json::json;
use url_shortener::api::handlers::redirect_handler;
use url_shortener::application::services::CreateShortUrl;

fn server(state: url_shortener::AppState) -> TestServer {
    let app = Router::new()
        .route("/{shortcode}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn create(ctx: &common::TestContext, code: &str, url: &str, validity: Option<u32>) {
    ctx.state
        .registry
        .create(CreateShortUrl {
            url: Some(url.to_string()),
            validity_minutes: validity,
            shortcode: Some(code.to_string()),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_redirect_success() {
    let ctx = common::create_test_state();
    create(&ctx, "redir1", "https://example.com/target", None).await;
    let server = server(ctx.state.clone());

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 301);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let ctx = common::create_test_state();
    let server = server(ctx.state.clone());

    let response = server.get("/nothere").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Shortcode not found" }));
}

#[tokio::test]
async fn test_redirect_records_click_with_referrer() {
    let ctx = common::create_test_state();
    create(&ctx, "track", "https://example.com", None).await;
    let server = server(ctx.state.clone());

    server
        .get("/track")
        .add_header("Referer", "https://google.com")
        .await;
    ctx.clock.advance(Duration::seconds(2));
    server.get("/track").await;

    let record = ctx.state.registry.stats("track").await.unwrap();
    assert_eq!(record.clicks.len(), 2);
    assert_eq!(record.clicks[0].referrer, "https://google.com");
    assert_eq!(record.clicks[1].referrer, "unknown");
    assert_eq!(record.clicks[1].location, "unknown");
    assert!(record.clicks[0].timestamp < record.clicks[1].timestamp);
}

#[tokio::test]
async fn test_redirect_round_trip_until_expiry() {
    let ctx = common::create_test_state();
    create(&ctx, "short1", "https://example.com", Some(1)).await;
    let server = server(ctx.state.clone());

    ctx.clock.advance(Duration::seconds(59));
    let response = server.get("/short1").await;
    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com");

    ctx.clock.advance(Duration::seconds(1));
    let response = server.get("/short1").await;
    assert_eq!(response.status_code(), 410);
    response.assert_json(&json!({ "error": "Shortcode expired" }));

    // The expired hit is not counted
    let record = ctx.state.registry.stats("short1").await.unwrap();
    assert_eq!(record.clicks.len(), 1);
}

#[tokio::test]
async fn test_redirect_shortcodes_are_case_sensitive() {
    let ctx = common::create_test_state();
    create(&ctx, "CaseA", "https://upper.example", None).await;
    let server = server(ctx.state.clone());

    server.get("/casea").await.assert_status_not_found();
    assert_eq!(server.get("/CaseA").await.status_code(), 301);
}

#[tokio::test]
async fn test_redirect_percent_encodes_location() {
    let ctx = common::create_test_state();
    create(&ctx, "uni1", "https://example.com/straße", None).await;
    let server = server(ctx.state.clone());

    let response = server.get("/uni1").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/stra%C3%9Fe");
}
