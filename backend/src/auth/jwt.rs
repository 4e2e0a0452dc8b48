//! JWT session credential generation and validation
//!
//! Tokens are HS256-signed, carry the account id as `sub` and expire
//! `session_expiry_secs` after issuance. Keys are pre-computed once and
//! shared through `AppState`.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use morpho_shared::AuthError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Pre-computed JWT keys
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: Arc::new(EncodingKey::from_secret(bytes)),
            decoding: Arc::new(DecodingKey::from_secret(bytes)),
        }
    }
}

/// JWT service for session credentials
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    issuer: Arc<str>,
    expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: SecretString, issuer: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(&secret),
            issuer: Arc::from(issuer),
            expiry_secs,
        }
    }

    /// Issue a session credential for an account
    #[inline]
    pub fn issue(&self, account_id: Uuid) -> Result<String> {
        self.issue_at(account_id, Utc::now())
    }

    /// Issue a session credential as if the current time were `now`
    pub fn issue_at(&self, account_id: Uuid, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_secs)).timestamp(),
            iss: self.issuer.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate session token: {}", e))
    }

    /// Verify a session credential and return the account id
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a session credential as if the current time were `now`
    ///
    /// Expiry is checked here rather than by `jsonwebtoken` so that it has
    /// no leeway and can be evaluated at an arbitrary instant.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.set_issuer(&[&*self.issuer]);

        let claims = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|_| AuthError::InvalidToken)?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)
    }

    /// Session lifetime in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(
            SecretString::new("test-secret".to_string()),
            "morphoconseil",
            86400,
        )
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();
        let account_id = Uuid::new_v4();

        let token = service.issue(account_id).unwrap();
        assert_eq!(service.verify(&token).unwrap(), account_id);
    }

    #[test]
    fn test_token_valid_for_24_hours() {
        let service = create_test_service();
        let account_id = Uuid::new_v4();
        let issued = Utc::now();

        let token = service.issue_at(account_id, issued).unwrap();

        let almost = issued + Duration::hours(23) + Duration::minutes(59);
        assert_eq!(service.verify_at(&token, almost).unwrap(), account_id);

        let after = issued + Duration::hours(24) + Duration::minutes(1);
        assert_eq!(service.verify_at(&token, after), Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        let service = create_test_service();
        let issued = Utc::now();
        let token = service.issue_at(Uuid::new_v4(), issued).unwrap();

        let exactly = issued + Duration::seconds(86400);
        assert_eq!(service.verify_at(&token, exactly), Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert_eq!(
            service.verify("invalid.token.here"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let service = create_test_service();
        let foreign = JwtService::new(
            SecretString::new("another-secret".to_string()),
            "morphoconseil",
            86400,
        );

        let token = foreign.issue(Uuid::new_v4()).unwrap();
        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_foreign_issuer_rejected() {
        let service = create_test_service();
        let other = JwtService::new(
            SecretString::new("test-secret".to_string()),
            "someone-else",
            86400,
        );

        let token = other.issue(Uuid::new_v4()).unwrap();
        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone();
        let token = service.issue(Uuid::new_v4()).unwrap();
        assert!(cloned.verify(&token).is_ok());
    }
}
