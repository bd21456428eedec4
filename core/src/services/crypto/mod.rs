//! Trait for the password/OTP hashing collaborator

use crate::errors::DomainError;

/// One-way salted hashing primitive for passwords and OTPs
///
/// The production implementation (bcrypt) lives in the infrastructure
/// layer. `verify` must be resistant to timing side channels.
pub trait CredentialHasher: Send + Sync {
    /// Compute a salted one-way hash of `plaintext`
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Check `plaintext` against a previously computed digest
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}
