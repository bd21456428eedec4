//! Business services containing domain logic and use cases.

pub mod crypto;
pub mod email;
pub mod onboarding;

// Re-export commonly used types
pub use crypto::CredentialHasher;
pub use email::EmailServiceTrait;
pub use onboarding::{OnboardingConfig, OnboardingService};
