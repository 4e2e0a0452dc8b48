//! Postgres account store

use super::account::{AccountRepository, NewAccount, RepositoryResult};
use crate::db;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use morpho_shared::{Account, MeasurementSnapshot, Measurements};
use sqlx::PgPool;
use uuid::Uuid;

/// Account row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
struct AccountRecord {
    id: Uuid,
    email: String,
    password_hash: String,
    bust_cm: Option<f64>,
    waist_cm: Option<f64>,
    hips_cm: Option<f64>,
    measured_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AccountRecord> for Account {
    fn from(r: AccountRecord) -> Self {
        let measurements = match (r.bust_cm, r.waist_cm, r.hips_cm, r.measured_at) {
            (Some(bust), Some(waist), Some(hips), Some(measured_at)) => Some(MeasurementSnapshot {
                measurements: Measurements::new(bust, waist, hips),
                measured_at,
            }),
            _ => None,
        };

        Account {
            id: r.id,
            email: r.email,
            password_hash: r.password_hash,
            measurements,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const ACCOUNT_COLUMNS: &str = "id, email, password_hash, bust_cm, waist_cm, hips_cm, \
                               measured_at, created_at, updated_at";

/// Account store backed by a Postgres pool
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: NewAccount) -> RepositoryResult<Account> {
        // The unique index on email turns a concurrent duplicate into a
        // unique violation, mapped to RepositoryError::Duplicate
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            r#"
            INSERT INTO accounts (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    async fn save_measurements(
        &self,
        id: Uuid,
        measurements: Measurements,
        measured_at: DateTime<Utc>,
    ) -> RepositoryResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE accounts SET
                bust_cm = $2,
                waist_cm = $3,
                hips_cm = $4,
                measured_at = $5,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(measurements.bust)
        .bind(measurements.waist)
        .bind(measurements.hips)
        .bind(measured_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        db::health_check(&self.pool)
            .await
            .map_err(super::RepositoryError::Unavailable)
    }
}
