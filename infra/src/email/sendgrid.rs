//! SendGrid email transport
//!
//! Sends mail through the SendGrid v3 API. Implements the core
//! `EmailServiceTrait` for production OTP delivery.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

use mm_core::services::EmailServiceTrait;
use mm_shared::config::EmailConfig;
use mm_shared::utils::validation::is_valid_email;

use crate::InfrastructureError;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid transport configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// API key used as a bearer token
    pub api_key: String,
    /// Sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl SendGridConfig {
    /// Build from the application email configuration
    pub fn from_email_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY not set".to_string(),
            ));
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

#[derive(Serialize)]
struct MailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<MailAddress<'a>>,
}

#[derive(Serialize)]
struct MailContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: MailAddress<'a>,
    subject: &'a str,
    content: Vec<MailContent<'a>>,
}

/// SendGrid implementation of the email transport
pub struct SendGridEmailService {
    client: reqwest::Client,
    config: SendGridConfig,
}

impl SendGridEmailService {
    /// Create a new SendGrid transport
    pub fn new(config: SendGridConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl EmailServiceTrait for SendGridEmailService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("invalid recipient address: {to}"));
        }

        let request = SendRequest {
            personalizations: vec![Personalization {
                to: vec![MailAddress { email: to, name: None }],
            }],
            from: MailAddress {
                email: &self.config.from_email,
                name: Some(&self.config.from_name),
            },
            subject,
            content: vec![MailContent {
                content_type: "text/plain",
                value: body,
            }],
        };

        debug!(to, subject, "sending email via SendGrid");

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("SendGrid request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(%status, detail, "SendGrid rejected the message");
            return Err(format!("SendGrid returned {status}"));
        }

        // SendGrid replies 202 with the message id in a header
        let message_id = response
            .headers()
            .get("X-Message-Id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        info!(
            target: "email_service",
            provider = "sendgrid",
            to,
            %message_id,
            "email accepted for delivery"
        );

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
