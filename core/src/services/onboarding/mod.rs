//! Onboarding and account activation service.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::OnboardingConfig;
pub use service::OnboardingService;
