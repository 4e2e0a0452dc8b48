//! Application state management
//!
//! Shared state passed to every handler via Axum's state extraction.
//! All fields are `Arc`s or Arc-backed, so cloning per request is cheap,
//! and nothing is mutated after startup except through the account store.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::{AccountRepository, InMemoryAccountRepository};
use crate::services::{LogMailer, Mailer};
use metrics_exporter_prometheus::PrometheusHandle;
use secrecy::SecretString;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Account store selected at startup
    pub accounts: Arc<dyn AccountRepository>,
    /// Result mail transport
    pub mailer: Arc<dyn Mailer>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Prometheus renderer, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the JWT keys from the config secret; call once at startup.
    pub fn new(
        config: AppConfig,
        accounts: Arc<dyn AccountRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let jwt = JwtService::new(
            SecretString::new(config.jwt.secret.clone()),
            &config.jwt.issuer,
            config.jwt.session_expiry_secs,
        );

        Self {
            config: Arc::new(config),
            accounts,
            mailer,
            jwt,
            metrics: None,
        }
    }

    /// State backed by the in-memory store and the logging mailer
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(LogMailer),
        )
    }

    /// Attach the Prometheus renderer served at `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    #[inline]
    pub fn accounts(&self) -> &dyn AccountRepository {
        self.accounts.as_ref()
    }

    #[inline]
    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
