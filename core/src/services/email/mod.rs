//! Trait for email transport integration

use async_trait::async_trait;

/// Trait for the outbound email collaborator
///
/// Implementations live in the infrastructure layer (SendGrid, mock).
/// Errors are plain strings; the service maps them to domain errors at the
/// operation boundary.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an email, returning a provider message id on success
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;

    /// Check if the address format is deliverable
    fn is_valid_email(&self, email: &str) -> bool;
}
