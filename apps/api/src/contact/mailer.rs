//! Contact notification delivery — pluggable, trait-based.
//!
//! Default: `LogMailer` (demo mode, records the submission in the log only).
//! `ResendMailer` posts to the Resend HTTP API when an API key is configured.
//!
//! `AppState` holds an `Arc<dyn Mailer>`, chosen at startup from config.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{MailConfig, ResendConfig};
use crate::contact::ContactSubmission;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Upper bound on a whole Resend round trip, connect included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// What the visitor is told after a successful dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReceipt {
    pub backend: String,
    pub message: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<DispatchReceipt, MailError>;
}

/// Picks the delivery backend from config.
pub fn build_mailer(config: &MailConfig) -> Result<Arc<dyn Mailer>, MailError> {
    let mailer: Arc<dyn Mailer> = match &config.resend {
        Some(resend) => {
            info!("Contact mailer: resend (to {})", resend.to_email);
            Arc::new(ResendMailer::new(resend.clone())?)
        }
        None => {
            info!("Contact mailer: log only (demo mode)");
            Arc::new(LogMailer)
        }
    };
    Ok(mailer)
}

// ────────────────────────────────────────────────────────────────────────────
// LogMailer
// ────────────────────────────────────────────────────────────────────────────

pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<DispatchReceipt, MailError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            received_at = %submission.received_at.to_rfc3339(),
            "Contact form submission (demo mode)"
        );
        Ok(DispatchReceipt {
            backend: "log".to_string(),
            message: "Message received (demo mode)".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ResendMailer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, PartialEq)]
struct ResendEmail<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    text: String,
}

pub struct ResendMailer {
    http: Client,
    endpoint: String,
    config: ResendConfig,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        Self::with_endpoint(config, RESEND_API_URL, REQUEST_TIMEOUT)
    }

    fn with_endpoint(
        config: ResendConfig,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        let http = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            config,
        })
    }

    fn build_email<'a>(&'a self, submission: &'a ContactSubmission) -> ResendEmail<'a> {
        ResendEmail {
            from: &self.config.from_email,
            to: vec![self.config.to_email.as_str()],
            reply_to: &submission.email,
            subject: format!("New contact form message from {}", submission.name),
            text: format!(
                "Name: {}\nEmail: {}\nReceived: {}\n\n{}",
                submission.name,
                submission.email,
                submission.received_at.to_rfc3339(),
                submission.message
            ),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<DispatchReceipt, MailError> {
        let body = self.build_email(submission);
        debug!(to = %self.config.to_email, "Sending contact notification via Resend");

        let response = self
            .http
            .post(self.endpoint.as_str())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!(email = %submission.email, "Contact notification sent");
        Ok(DispatchReceipt {
            backend: "resend".to_string(),
            message: "Message sent".to_string(),
        })
    }
}
