//! Mock email transport
//!
//! Logs messages instead of sending them and keeps a copy of every
//! message so tests can inspect what would have gone out.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use mm_core::services::EmailServiceTrait;
use mm_shared::utils::validation::is_valid_email;

/// A message captured by the mock transport
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub message_id: String,
}

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    sent: Arc<Mutex<Vec<CapturedEmail>>>,
    simulate_failure: Arc<AtomicBool>,
}

impl MockEmailService {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Copy of the most recently accepted message
    pub fn last_email(&self) -> Option<CapturedEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("invalid recipient address: {to}"));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(to, "mock email service simulating delivery failure");
            return Err("simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        info!(
            target: "email_service",
            provider = "mock",
            to,
            subject,
            %message_id,
            "email captured instead of sent"
        );

        self.sent.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            message_id: message_id.clone(),
        });

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
