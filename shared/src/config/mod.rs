//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `email` - Outbound email (OTP delivery) configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration
//! - `store` - Keyed document store (Redis) configuration

pub mod email;
pub mod environment;
pub mod server;
pub mod store;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use email::EmailConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use store::StoreConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Document store configuration
    pub store: StoreConfig,

    /// Email service configuration
    pub email: EmailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
