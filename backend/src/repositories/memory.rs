//! In-memory account store
//!
//! Used by the test suite and by `database.backend = "memory"` for local
//! runs without Postgres. Accounts are lost on restart.

use super::account::{AccountRepository, NewAccount, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use morpho_shared::{Account, MeasurementSnapshot, Measurements};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Store {
    accounts: HashMap<Uuid, Account>,
    by_email: HashMap<String, Uuid>,
}

/// Account store backed by a `HashMap` behind an async `RwLock`
#[derive(Default)]
pub struct InMemoryAccountRepository {
    store: RwLock<Store>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.store.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: NewAccount) -> RepositoryResult<Account> {
        // Check and insert under one write lock
        let mut store = self.store.write().await;
        if store.by_email.contains_key(&account.email) {
            return Err(RepositoryError::Duplicate);
        }

        let now = Utc::now();
        let created = Account {
            id: Uuid::new_v4(),
            email: account.email,
            password_hash: account.password_hash,
            measurements: None,
            created_at: now,
            updated_at: now,
        };

        store.by_email.insert(created.email.clone(), created.id);
        store.accounts.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let store = self.store.read().await;
        Ok(store
            .by_email
            .get(email)
            .and_then(|id| store.accounts.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Account>> {
        Ok(self.store.read().await.accounts.get(&id).cloned())
    }

    async fn save_measurements(
        &self,
        id: Uuid,
        measurements: Measurements,
        measured_at: DateTime<Utc>,
    ) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;
        match store.accounts.get_mut(&id) {
            Some(account) => {
                account.measurements = Some(MeasurementSnapshot {
                    measurements,
                    measured_at,
                });
                account.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
