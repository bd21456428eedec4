//! Onboarding and authentication route handlers
//!
//! Endpoints under `/api/v1/auth`:
//! - Onboard (create a pending account and email the OTP)
//! - OTP verification and resend
//! - Password set (activation) and login
//! - User type and profile lookups

pub mod login;
pub mod onboard;
pub mod resend_otp;
pub mod set_password;
pub mod users;
pub mod verify_otp;

pub use onboard::AppState;
