//! Integration tests for health check and metrics endpoints

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use morpho_backend::state::AppState;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
    assert!(body.contains("account_store"));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let state = AppState::in_memory(common::test_config()).with_metrics(handle);
    let app = common::TestApp::from_state(state);

    let (status, _) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_response_carries_generated_request_id() {
    let app = common::TestApp::new();

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_inbound_request_id_is_echoed() {
    let app = common::TestApp::new();

    let request = Request::builder()
        .uri("/health/live")
        .header("x-request-id", "client-supplied-id")
        .body(Body::empty())
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "client-supplied-id");
}

#[tokio::test]
async fn test_error_response_carries_request_id() {
    let app = common::TestApp::new();

    let request = Request::builder().uri("/me").body(Body::empty()).unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("x-request-id"));
}
