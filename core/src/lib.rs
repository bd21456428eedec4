//! # MeetMe Core
//!
//! Core business logic and domain layer for the MeetMe backend.
//! This crate contains the account entity and its activation state machine,
//! the onboarding service, repository interfaces, collaborator traits and
//! domain error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
