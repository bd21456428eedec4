//! Keyed document store configuration module
//!
//! The backend treats persistence as an opaque keyed document store; the
//! concrete implementation (Redis) only needs a connection URL and a key
//! namespace. Credentials are carried opaquely inside the URL.

use serde::{Deserialize, Serialize};

/// Document store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Store connection URL (e.g. `redis://:password@localhost:6379/0`)
    pub url: String,

    /// Key namespace prefix for account records
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            key_prefix: default_key_prefix(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl StoreConfig {
    /// Create a new store configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("STORE_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let key_prefix =
            std::env::var("STORE_KEY_PREFIX").unwrap_or_else(|_| default_key_prefix());

        Self {
            url,
            key_prefix,
            ..Default::default()
        }
    }
}

fn default_key_prefix() -> String {
    String::from("meetme:account")
}

fn default_connect_timeout() -> u64 {
    5
}
