//! bcrypt implementation of the credential hasher
//!
//! Both passwords and one-time codes go through the same salted hash so
//! the store never holds a recoverable secret. `bcrypt::verify` compares
//! in constant time.

use bcrypt::DEFAULT_COST;

use mm_core::errors::DomainError;
use mm_core::services::CredentialHasher;

/// bcrypt-backed hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the library default cost
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a hasher with an explicit cost (lower costs keep tests fast)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("hashing failed: {e}"),
        })
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}
