//! Domain-specific error types for the onboarding and activation flow.
//!
//! Error messages here are deliberately generic where the HTTP contract
//! requires a uniform outcome: the OTP check and the login check never
//! distinguish their individual failure causes.

use thiserror::Error;

/// Authentication and activation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Duplicate onboarding for an existing `id_num`
    #[error("Account already exists")]
    AccountAlreadyExists,

    /// Unknown `id_num` where the operation requires an existing record
    #[error("Account not found")]
    AccountNotFound,

    /// Uniform OTP check failure: wrong code, expired code, or no code
    /// pending. Callers must not be able to tell these apart.
    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    /// Uniform login failure: unknown account, no password set, or
    /// password mismatch. Callers must not be able to tell these apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Resend requested for an account that already completed activation
    #[error("Account already activated")]
    AlreadyActivated,

    /// The OTP email could not be dispatched
    #[error("Email service failure")]
    EmailServiceFailure,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid user type: {value}")]
    InvalidUserType { value: String },
}
