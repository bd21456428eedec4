//! Domain entities representing core business objects.

pub mod account;
pub mod otp;

// Re-export commonly used types
pub use account::{Account, AccountStatus, AccountView, UserType};
pub use otp::{OtpCode, OTP_CODE_LENGTH, OTP_EXPIRATION_MINUTES};
