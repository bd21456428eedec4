//! Account repository trait defining the interface for account persistence.
//!
//! The store is the sole point of concurrency control: every method that
//! writes is a single per-key atomic unit. Implementations must guarantee
//! that two concurrent `create` calls for the same `id_num` cannot both
//! succeed, and that `activate` and `reissue_otp` are read-modify-write
//! operations that never leave a half-updated record visible.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual keyed document store access while
/// keeping the abstraction boundary between domain and infrastructure.
/// The service layer is unit-tested against [`super::MockAccountRepository`].
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its `id_num`
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given key
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_id(&self, id_num: &str) -> Result<Option<Account>, DomainError>;

    /// Check whether an account exists for the given `id_num`
    async fn exists(&self, id_num: &str) -> Result<bool, DomainError>;

    /// Conditionally create a new account record
    ///
    /// The existence check and the write form one atomic unit.
    ///
    /// # Returns
    /// * `Ok(Account)` - The created record
    /// * `Err(DomainError::Auth(AuthError::AccountAlreadyExists))` - A record
    ///   for this `id_num` already exists (never overwritten)
    /// * `Err(DomainError)` - Store error occurred
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Atomically activate an account: set `password_hash` and clear both
    /// OTP fields in a single update
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated record
    /// * `Err(DomainError::Auth(AuthError::AccountNotFound))` - No record
    /// * `Err(DomainError)` - Store error occurred
    async fn activate(&self, id_num: &str, password_hash: &str) -> Result<Account, DomainError>;

    /// Atomically replace the pending OTP pair on a not-yet-activated record
    ///
    /// The activation check is part of the same atomic unit as the write:
    /// a `set_password` that commits between the caller's read and this
    /// call makes the reissue fail rather than leave a record with both a
    /// password hash and a pending OTP.
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated record
    /// * `Err(DomainError::Auth(AuthError::AccountNotFound))` - No record
    /// * `Err(DomainError::Auth(AuthError::AlreadyActivated))` - The record
    ///   has a password set; a new OTP is never issued onto it
    /// * `Err(DomainError)` - Store error occurred
    async fn reissue_otp(
        &self,
        id_num: &str,
        otp_hash: &str,
        otp_expires_at: DateTime<Utc>,
    ) -> Result<Account, DomainError>;
}
