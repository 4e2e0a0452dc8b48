//! Property-based tests for authentication enforcement
//!
//! Every protected endpoint must answer 401 unless the request carries a
//! session credential signed with this server's key.

#[cfg(test)]
mod tests {
    use crate::auth::JwtService;
    use crate::config::AppConfig;
    use crate::routes::create_router;
    use crate::state::AppState;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use proptest::prelude::*;
    use secrecy::SecretString;
    use tower::ServiceExt;

    const PROTECTED: [(&str, &str); 4] = [
        ("POST", "/analyze"),
        ("POST", "/send-result"),
        ("POST", "/export/csv"),
        ("GET", "/me"),
    ];

    const MEASUREMENTS: &str = r#"{"bust":90,"waist":70,"hips":95}"#;

    fn create_test_state() -> AppState {
        AppState::in_memory(AppConfig::default())
    }

    fn request(method: &str, uri: &str, auth_header: Option<String>) -> Request<Body> {
        let mut builder = Request::builder()
            .uri(uri)
            .method(method)
            .header("Content-Type", "application/json");

        if let Some(header) = auth_header {
            builder = builder.header("Authorization", header);
        }

        let body = if method == "GET" {
            Body::empty()
        } else {
            Body::from(MEASUREMENTS)
        };
        builder.body(body).unwrap()
    }

    async fn error_code(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        value["code"].as_str().unwrap_or_default().to_string()
    }

    /// Generate random invalid tokens
    fn invalid_token_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Empty token
            Just("".to_string()),
            // Random string (not a valid JWT)
            "[a-zA-Z0-9]{10,50}",
            // Malformed JWT (wrong number of parts)
            "[a-zA-Z0-9]{10}\\.[a-zA-Z0-9]{10}",
            // Valid format but invalid signature
            "[a-zA-Z0-9_-]{20}\\.[a-zA-Z0-9_-]{20}\\.[a-zA-Z0-9_-]{20}",
        ]
    }

    /// Generate random authorization header formats
    fn auth_header_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            // No header
            Just(None),
            // Missing Bearer prefix
            invalid_token_strategy().prop_map(Some),
            // Wrong prefix
            invalid_token_strategy().prop_map(|t| Some(format!("Basic {}", t))),
            // Bearer with invalid token
            invalid_token_strategy().prop_map(|t| Some(format!("Bearer {}", t))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Unauthenticated requests to protected endpoints return 401
        #[test]
        fn prop_unauthenticated_requests_return_401(
            auth_header in auth_header_strategy(),
            endpoint in 0usize..PROTECTED.len(),
        ) {
            tokio_test::block_on(async {
                let app = create_router(create_test_state());
                let (method, uri) = PROTECTED[endpoint];

                let response = app.oneshot(request(method, uri, auth_header)).await.unwrap();

                prop_assert_eq!(
                    response.status(),
                    StatusCode::UNAUTHORIZED,
                    "Expected 401 for unauthenticated {} {}", method, uri
                );

                Ok(())
            })?;
        }
    }

    #[tokio::test]
    async fn test_missing_auth_header_returns_401() {
        let app = create_router(create_test_state());
        let response = app.oneshot(request("POST", "/analyze", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(response).await, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_invalid_bearer_token_returns_401() {
        let app = create_router(create_test_state());
        let response = app
            .oneshot(request(
                "POST",
                "/analyze",
                Some("Bearer invalid.token.here".to_string()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(response).await, "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn test_token_with_wrong_secret_returns_401() {
        let state = create_test_state();
        let foreign = JwtService::new(
            SecretString::new("wrong-secret-key".to_string()),
            &state.config().jwt.issuer,
            3600,
        );
        let token = foreign.issue(uuid::Uuid::new_v4()).unwrap();

        let app = create_router(state);
        let response = app
            .oneshot(request("GET", "/me", Some(format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(response).await, "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn test_expired_token_returns_401() {
        let state = create_test_state();
        let issued = Utc::now() - Duration::hours(25);
        let token = state.jwt().issue_at(uuid::Uuid::new_v4(), issued).unwrap();

        let app = create_router(state);
        let response = app
            .oneshot(request("POST", "/analyze", Some(format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(response).await, "TOKEN_EXPIRED");
    }

    #[tokio::test]
    async fn test_valid_token_passes_auth() {
        let state = create_test_state();
        let token = state.jwt().issue(uuid::Uuid::new_v4()).unwrap();

        let app = create_router(state);
        let response = app
            .oneshot(request("POST", "/analyze", Some(format!("Bearer {}", token))))
            .await
            .unwrap();

        // Classification does not need the account to exist
        assert_eq!(response.status(), StatusCode::OK);
    }
}
