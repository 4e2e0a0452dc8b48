//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use crate::repositories::RepositoryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use morpho_shared::{AuthError, ErrorResponse, MorphologyError};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidMeasurement(#[from] MorphologyError),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Downstream failure")]
    Downstream(#[source] anyhow::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::InvalidMeasurement(_) => (StatusCode::BAD_REQUEST, "INVALID_MEASUREMENT"),
            ApiError::DuplicateEmail => (StatusCode::CONFLICT, "DUPLICATE_EMAIL"),
            ApiError::AccountNotFound => (StatusCode::NOT_FOUND, "ACCOUNT_NOT_FOUND"),
            ApiError::InvalidCredential => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIAL"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::TokenExpired => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED"),
            ApiError::TokenInvalid => (StatusCode::UNAUTHORIZED, "TOKEN_INVALID"),
            ApiError::Downstream(_) => (StatusCode::SERVICE_UNAVAILABLE, "DOWNSTREAM_FAILURE"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired => ApiError::TokenExpired,
            AuthError::InvalidToken => ApiError::TokenInvalid,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate => ApiError::DuplicateEmail,
            RepositoryError::Unavailable(e) => ApiError::Downstream(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "An internal error occurred".to_string()
            }
            ApiError::Downstream(err) => {
                error!("Downstream failure: {:?}", err);
                "A downstream service is unavailable".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::Validation("bad".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR")]
    #[case(
        ApiError::InvalidMeasurement(MorphologyError::InvalidMeasurement { field: "hips", value: 0.0 }),
        StatusCode::BAD_REQUEST,
        "INVALID_MEASUREMENT"
    )]
    #[case(ApiError::DuplicateEmail, StatusCode::CONFLICT, "DUPLICATE_EMAIL")]
    #[case(ApiError::AccountNotFound, StatusCode::NOT_FOUND, "ACCOUNT_NOT_FOUND")]
    #[case(ApiError::InvalidCredential, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIAL")]
    #[case(ApiError::TokenExpired, StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED")]
    #[case(ApiError::TokenInvalid, StatusCode::UNAUTHORIZED, "TOKEN_INVALID")]
    #[case(
        ApiError::Downstream(anyhow::anyhow!("relay down")),
        StatusCode::SERVICE_UNAVAILABLE,
        "DOWNSTREAM_FAILURE"
    )]
    #[case(
        ApiError::Internal(anyhow::anyhow!("boom")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR"
    )]
    fn test_error_mapping(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        assert_eq!(error.status_and_code(), (status, code));
        assert_eq!(error.into_response().status(), status);
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_cause() {
        let response = ApiError::Internal(anyhow::anyhow!("secret connection string")).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.code, "INTERNAL_ERROR");
        assert!(!body.error.contains("secret"));
    }

    #[test]
    fn test_repository_errors_convert() {
        assert!(matches!(
            ApiError::from(RepositoryError::Duplicate),
            ApiError::DuplicateEmail
        ));
        assert!(matches!(
            ApiError::from(RepositoryError::Unavailable(anyhow::anyhow!("down"))),
            ApiError::Downstream(_)
        ));
    }

    #[test]
    fn test_auth_errors_convert() {
        assert!(matches!(ApiError::from(AuthError::TokenExpired), ApiError::TokenExpired));
        assert!(matches!(ApiError::from(AuthError::InvalidToken), ApiError::TokenInvalid));
    }
}
