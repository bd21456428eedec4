//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountRepository;

/// In-memory account repository for testing
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records (test helper)
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the store is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id_num: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id_num).cloned())
    }

    async fn exists(&self, id_num: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(id_num))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.id_num) {
            return Err(DomainError::Auth(AuthError::AccountAlreadyExists));
        }

        accounts.insert(account.id_num.clone(), account.clone());
        Ok(account)
    }

    async fn activate(&self, id_num: &str, password_hash: &str) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .get_mut(id_num)
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        account.activate(password_hash.to_string());
        Ok(account.clone())
    }

    async fn reissue_otp(
        &self,
        id_num: &str,
        otp_hash: &str,
        otp_expires_at: DateTime<Utc>,
    ) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .get_mut(id_num)
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        // Checked under the same write lock as the update, so an
        // activation committed after the caller's read still wins
        if account.is_activated() {
            return Err(DomainError::Auth(AuthError::AlreadyActivated));
        }

        account.reissue_otp(otp_hash.to_string(), otp_expires_at);
        Ok(account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::UserType;
    use chrono::Duration;

    fn sample_account(id_num: &str) -> Account {
        Account::new(
            id_num.to_string(),
            "Ann".to_string(),
            "Lee".to_string(),
            UserType::Student,
            "CS".to_string(),
            "a@x.com".to_string(),
            "otp-hash".to_string(),
            Utc::now() + Duration::minutes(10),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockAccountRepository::new();
        repo.create(sample_account("S100")).await.unwrap();

        let found = repo.find_by_id("S100").await.unwrap();
        assert!(found.is_some());
        assert!(repo.exists("S100").await.unwrap());
        assert!(!repo.exists("S999").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_is_conditional() {
        let repo = MockAccountRepository::new();
        repo.create(sample_account("S100")).await.unwrap();

        let err = repo.create(sample_account("S100")).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::AccountAlreadyExists)
        ));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_activate_clears_otp_atomically() {
        let repo = MockAccountRepository::new();
        repo.create(sample_account("S100")).await.unwrap();

        let account = repo.activate("S100", "pw-hash").await.unwrap();
        assert_eq!(account.password_hash.as_deref(), Some("pw-hash"));
        assert!(account.otp_hash.is_none());
        assert!(account.otp_expires_at.is_none());
    }

    #[tokio::test]
    async fn test_activate_unknown_account() {
        let repo = MockAccountRepository::new();
        let err = repo.activate("S404", "pw-hash").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_reissue_refused_on_activated_record() {
        let repo = MockAccountRepository::new();
        repo.create(sample_account("S100")).await.unwrap();
        repo.activate("S100", "pw-hash").await.unwrap();

        let err = repo
            .reissue_otp("S100", "new-hash", Utc::now() + Duration::minutes(10))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::AlreadyActivated)
        ));

        // The record keeps the password and stays free of OTP material
        let account = repo.find_by_id("S100").await.unwrap().unwrap();
        assert_eq!(account.password_hash.as_deref(), Some("pw-hash"));
        assert!(account.otp_hash.is_none());
        assert!(account.otp_expires_at.is_none());
    }

    #[tokio::test]
    async fn test_reissue_replaces_otp() {
        let repo = MockAccountRepository::new();
        repo.create(sample_account("S100")).await.unwrap();

        let expires = Utc::now() + Duration::minutes(10);
        let account = repo.reissue_otp("S100", "new-hash", expires).await.unwrap();
        assert_eq!(account.otp_hash.as_deref(), Some("new-hash"));
        assert_eq!(account.otp_expires_at, Some(expires));
    }
}
