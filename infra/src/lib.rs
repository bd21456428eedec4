//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core layer depends on:
//!
//! - **Store**: Redis-backed keyed document store implementing
//!   `AccountRepository` with per-key atomic writes
//! - **Email**: SendGrid transport and a console mock for development
//! - **Crypto**: bcrypt implementation of the hashing primitive

/// Document store module - Redis implementation
pub mod store;

/// Email transport module - SendGrid and mock implementations
pub mod email;

/// Hashing module - bcrypt credential hasher
pub mod crypto;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Document store connection error
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),
}
