//! Result mailer
//!
//! Composes the result email and hands it to a [`Mailer`] transport:
//! - `LogMailer` logs the message (development default)
//! - `HttpMailer` POSTs it as JSON to a mail relay with a bearer API key

use crate::config::{MailConfig, MailTransport};
use crate::error::ApiError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use morpho_shared::AnalysisResult;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const RESULT_SUBJECT: &str = "Votre résultat MorphoConseil";

/// Outgoing email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<()>;
}

/// Transport that only logs messages
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.text.len(),
            "Mail transport disabled, message logged"
        );
        Ok(())
    }
}

/// Relay request body
#[derive(Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Transport that POSTs messages to an HTTP mail relay
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    from: String,
}

impl HttpMailer {
    pub fn new(endpoint: String, api_key: SecretString, from: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build mail relay client")?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            from,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let payload = RelayPayload {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            text: &message.text,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .context("Mail relay request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Mail relay returned {}", status);
        }

        Ok(())
    }
}

/// Build the configured transport
pub fn mailer_from_config(config: &MailConfig) -> Result<Arc<dyn Mailer>> {
    match config.transport {
        MailTransport::Log => Ok(Arc::new(LogMailer)),
        MailTransport::Http => {
            if config.endpoint.is_empty() {
                anyhow::bail!("mail.endpoint is required for the http transport");
            }
            Ok(Arc::new(HttpMailer::new(
                config.endpoint.clone(),
                SecretString::new(config.api_key.clone()),
                config.from.clone(),
                Duration::from_secs(config.timeout_secs),
            )?))
        }
    }
}

/// Result mail composition and delivery
pub struct MailService;

impl MailService {
    /// Compose the email for an analysis result
    ///
    /// Only the category code is taken from the posted result; label and
    /// advice always come from the server's own table.
    pub fn compose(to: &str, result: &AnalysisResult) -> MailMessage {
        let morphology = result.morphology;

        MailMessage {
            to: to.to_string(),
            subject: RESULT_SUBJECT.to_string(),
            text: format!(
                "Votre type morphologique: {}\n\nConseils: {}",
                morphology.label(),
                morphology.advice()
            ),
        }
    }

    /// Email an analysis result
    pub async fn send_result(
        mailer: &dyn Mailer,
        to: &str,
        result: &AnalysisResult,
    ) -> Result<(), ApiError> {
        let message = Self::compose(to, result);
        mailer.send(&message).await.map_err(ApiError::Downstream)?;

        metrics::counter!("morpho_results_sent_total").increment(1);
        info!(morphology = %result.morphology, "Result email sent");
        Ok(())
    }
}
