//! Common test utilities for integration tests
//!
//! The router runs against the in-memory account store and the logging
//! mailer, so these tests need no database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use morpho_backend::{
    config::{AppConfig, StorageBackend},
    routes,
    services::Mailer,
    state::AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        Self::from_state(AppState::in_memory(test_config()))
    }

    /// Create a test application with a specific mail transport
    pub fn with_mailer(mailer: Arc<dyn Mailer>) -> Self {
        let mut state = AppState::in_memory(test_config());
        state.mailer = mailer;
        Self::from_state(state)
    }

    pub fn from_state(state: AppState) -> Self {
        let app = routes::create_router(state.clone());
        Self { app, state }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Register an account and log in, returning the session token
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let body = json!({ "email": email, "password": password }).to_string();

        let (status, response) = self.post("/register", &body).await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", response);

        let (status, response) = self.post("/login", &body).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", response);

        let response: Value = serde_json::from_str(&response).unwrap();
        response["token"].as_str().unwrap().to_string()
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.database.backend = StorageBackend::Memory;
    config.jwt.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config
}

/// Parse a JSON error body and return its code
pub fn error_code(body: &str) -> String {
    let value: Value = serde_json::from_str(body).unwrap();
    value["code"].as_str().unwrap_or_default().to_string()
}
