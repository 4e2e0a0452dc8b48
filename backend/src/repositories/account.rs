//! Account repository contract

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use morpho_shared::{Account, Measurements};
use thiserror::Error;
use uuid::Uuid;

/// Account store errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// An account with this email already exists
    #[error("Email already registered")]
    Duplicate,

    /// The backing store could not serve the request
    #[error("Account store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return RepositoryError::Duplicate;
            }
        }
        RepositoryError::Unavailable(err.into())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
}

/// Persistent account store
///
/// Implementations must enforce email uniqueness atomically: two concurrent
/// `create` calls with the same email yield exactly one account.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account, failing with `Duplicate` if the email is taken
    async fn create(&self, account: NewAccount) -> RepositoryResult<Account>;

    /// Look up an account by exact email
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;

    /// Look up an account by id
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Account>>;

    /// Replace the account's measurement snapshot
    ///
    /// Returns `false` when no account has this id.
    async fn save_measurements(
        &self,
        id: Uuid,
        measurements: Measurements,
        measured_at: DateTime<Utc>,
    ) -> RepositoryResult<bool>;

    /// Check that the store is reachable
    async fn health_check(&self) -> RepositoryResult<()>;
}
