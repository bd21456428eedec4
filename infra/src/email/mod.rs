//! Outbound email delivery implementations
//!
//! Provides the production SendGrid transport and a mock transport for
//! development and testing. Both implement the core `EmailServiceTrait`.

pub mod mock_email;
pub mod sendgrid;

pub use mock_email::MockEmailService;
pub use sendgrid::{SendGridConfig, SendGridEmailService};

use async_trait::async_trait;

use mm_core::services::EmailServiceTrait;
use mm_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Concrete transport selected by configuration
///
/// An enum rather than a trait object so the generic service type stays
/// nameable at the wiring site.
pub enum EmailProvider {
    SendGrid(SendGridEmailService),
    Mock(MockEmailService),
}

#[async_trait]
impl EmailServiceTrait for EmailProvider {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        match self {
            EmailProvider::SendGrid(service) => service.send_email(to, subject, body).await,
            EmailProvider::Mock(service) => service.send_email(to, subject, body).await,
        }
    }

    fn is_valid_email(&self, email: &str) -> bool {
        match self {
            EmailProvider::SendGrid(service) => service.is_valid_email(email),
            EmailProvider::Mock(service) => service.is_valid_email(email),
        }
    }
}

/// Build the email transport named by the configuration
///
/// Unknown provider names are a configuration error rather than a silent
/// fallback to the mock.
pub fn create_email_service(config: &EmailConfig) -> Result<EmailProvider, InfrastructureError> {
    match config.provider.as_str() {
        "sendgrid" => {
            let sendgrid = SendGridEmailService::new(SendGridConfig::from_email_config(config)?)?;
            Ok(EmailProvider::SendGrid(sendgrid))
        }
        "mock" => Ok(EmailProvider::Mock(MockEmailService::new())),
        other => Err(InfrastructureError::Config(format!(
            "unknown email provider: {other}"
        ))),
    }
}
