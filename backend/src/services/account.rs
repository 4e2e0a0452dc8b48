//! Account service: registration, login and profile lookup
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed by reference with its keys already computed.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{AccountRepository, NewAccount};
use morpho_shared::types::{AccountProfile, RegisterRequest, SessionToken};
use morpho_shared::validation::validate_request;
use morpho_shared::Account;
use tracing::{info, warn};
use uuid::Uuid;

/// Account service
pub struct AccountService;

impl AccountService {
    /// Register a new account
    ///
    /// The email is stored exactly as submitted.
    pub async fn register(
        accounts: &dyn AccountRepository,
        req: &RegisterRequest,
    ) -> Result<Account, ApiError> {
        validate_request(req).map_err(ApiError::Validation)?;

        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let account = accounts
            .create(NewAccount {
                email: req.email.clone(),
                password_hash,
            })
            .await?;

        metrics::counter!("morpho_registrations_total").increment(1);
        info!(account_id = %account.id, "Account registered");

        Ok(account)
    }

    /// Verify credentials and issue a session credential
    pub async fn login(
        accounts: &dyn AccountRepository,
        jwt: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, ApiError> {
        let Some(account) = accounts.find_by_email(email).await? else {
            metrics::counter!("morpho_logins_total", "outcome" => "not_found").increment(1);
            warn!("Login attempt for unknown account");
            return Err(ApiError::AccountNotFound);
        };

        let valid = PasswordService::verify_async(password.to_string(), account.password_hash)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            metrics::counter!("morpho_logins_total", "outcome" => "invalid_credential")
                .increment(1);
            warn!(account_id = %account.id, "Login failed: wrong password");
            return Err(ApiError::InvalidCredential);
        }

        let token = jwt.issue(account.id).map_err(ApiError::Internal)?;

        metrics::counter!("morpho_logins_total", "outcome" => "success").increment(1);
        info!(account_id = %account.id, "Login succeeded");

        Ok(SessionToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: jwt.expiry_secs(),
        })
    }

    /// Profile of an authenticated account
    pub async fn profile(
        accounts: &dyn AccountRepository,
        account_id: Uuid,
    ) -> Result<AccountProfile, ApiError> {
        let account = accounts
            .find_by_id(account_id)
            .await?
            .ok_or(ApiError::AccountNotFound)?;

        Ok(AccountProfile {
            id: account.id.to_string(),
            email: account.email,
            created_at: account.created_at,
            measurements: account.measurements,
        })
    }
}
