//! Onboarding service configuration

/// Configuration for the onboarding service
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// Subject line of the OTP verification email
    pub email_subject: String,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            email_subject: String::from("MeetMe OTP Verification"),
        }
    }
}
