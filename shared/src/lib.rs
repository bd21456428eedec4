//! Shared utilities and common types for the MeetMe backend
//!
//! This crate provides common functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - API response and error envelope structures
//! - Validation helpers (email format, required fields)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, EmailConfig, Environment, ServerConfig, StoreConfig};
pub use types::response::{ApiResponse, ErrorResponse, HealthResponse};
pub use utils::validation;
