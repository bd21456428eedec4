//! Email service configuration module

use serde::{Deserialize, Serialize};

/// Outbound email configuration for OTP delivery
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email service provider ("sendgrid", "mock")
    pub provider: String,

    /// API key for the email provider (opaque credential)
    pub api_key: String,

    /// Sender address
    pub from_email: String,

    /// Sender display name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            from_email: String::from("no-reply@meetme.app"),
            from_name: default_from_name(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
            from_email: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "no-reply@meetme.app".to_string()),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| default_from_name()),
        }
    }
}

fn default_from_name() -> String {
    String::from("MeetMe")
}
