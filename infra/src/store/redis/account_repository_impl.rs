//! Redis implementation of the AccountRepository trait.
//!
//! Account records are stored as JSON documents under
//! `{prefix}:{id_num}`. The store is the sole point of concurrency
//! control, so every write is a single atomic unit on the server side:
//! conditional creation uses `SET NX`, and the two read-modify-write
//! updates run as Lua scripts so no interleaving can observe a
//! half-updated record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::Script;
use tracing::debug;

use mm_core::domain::entities::account::Account;
use mm_core::errors::{AuthError, DomainError};
use mm_core::repositories::AccountRepository;
use mm_shared::config::StoreConfig;

use crate::InfrastructureError;

/// Atomically set the password hash and clear both OTP fields.
/// Returns the updated document, or nil when the key is absent.
const ACTIVATE_SCRIPT: &str = r#"
local raw = redis.call('GET', KEYS[1])
if not raw then
  return nil
end
local doc = cjson.decode(raw)
doc.password_hash = ARGV[1]
doc.otp_hash = cjson.null
doc.otp_expires_at = cjson.null
doc.updated_at = ARGV[2]
local out = cjson.encode(doc)
redis.call('SET', KEYS[1], out)
return out
"#;

/// Atomically replace the pending OTP pair.
/// The activation check happens inside the script so a racing
/// `set_password` cannot be followed by an OTP write onto the now
/// activated record. Returns the updated document, the marker
/// `ALREADY_ACTIVATED` when a password is set, or nil when the key is
/// absent. Documents never start with an 'A', so the marker cannot
/// collide with a JSON payload.
const REISSUE_OTP_SCRIPT: &str = r#"
local raw = redis.call('GET', KEYS[1])
if not raw then
  return nil
end
local doc = cjson.decode(raw)
if doc.password_hash ~= nil and doc.password_hash ~= cjson.null then
  return 'ALREADY_ACTIVATED'
end
doc.otp_hash = ARGV[1]
doc.otp_expires_at = ARGV[2]
doc.updated_at = ARGV[3]
local out = cjson.encode(doc)
redis.call('SET', KEYS[1], out)
return out
"#;

/// Redis-backed implementation of AccountRepository
#[derive(Clone)]
pub struct RedisAccountRepository {
    /// Multiplexed connection to the store
    conn: ConnectionManager,
    /// Key namespace for account documents
    key_prefix: String,
}

impl RedisAccountRepository {
    /// Connect to the store described by `config`
    pub async fn connect(config: &StoreConfig) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(config.url.as_str())?;
        let conn = ConnectionManager::new(client).await?;

        debug!(key_prefix = %config.key_prefix, "connected to account store");

        Ok(Self {
            conn,
            key_prefix: config.key_prefix.clone(),
        })
    }

    /// Build from an existing connection (used by tests and wiring code)
    pub fn new(conn: ConnectionManager, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, id_num: &str) -> String {
        format!("{}:{}", self.key_prefix, id_num)
    }

    fn decode(raw: &str) -> Result<Account, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::Database {
            message: format!("corrupt account document: {e}"),
        })
    }

    fn encode(account: &Account) -> Result<String, DomainError> {
        serde_json::to_string(account).map_err(|e| DomainError::Database {
            message: format!("failed to encode account document: {e}"),
        })
    }

    fn store_err(e: redis::RedisError) -> DomainError {
        DomainError::Database {
            message: format!("store access failed: {e}"),
        }
    }
}

#[async_trait]
impl AccountRepository for RedisAccountRepository {
    async fn find_by_id(&self, id_num: &str) -> Result<Option<Account>, DomainError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = redis::cmd("GET")
            .arg(self.key_for(id_num))
            .query_async(&mut conn)
            .await
            .map_err(Self::store_err)?;

        raw.as_deref().map(Self::decode).transpose()
    }

    async fn exists(&self, id_num: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        let exists: bool = redis::cmd("EXISTS")
            .arg(self.key_for(id_num))
            .query_async(&mut conn)
            .await
            .map_err(Self::store_err)?;

        Ok(exists)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut conn = self.conn.clone();
        let document = Self::encode(&account)?;

        // SET NX makes the existence check and the write one atomic unit
        let created: Option<String> = redis::cmd("SET")
            .arg(self.key_for(&account.id_num))
            .arg(document)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(Self::store_err)?;

        if created.is_none() {
            return Err(DomainError::Auth(AuthError::AccountAlreadyExists));
        }

        Ok(account)
    }

    async fn activate(&self, id_num: &str, password_hash: &str) -> Result<Account, DomainError> {
        let mut conn = self.conn.clone();
        let updated: Option<String> = Script::new(ACTIVATE_SCRIPT)
            .key(self.key_for(id_num))
            .arg(password_hash)
            .arg(Utc::now().to_rfc3339())
            .invoke_async(&mut conn)
            .await
            .map_err(Self::store_err)?;

        match updated {
            Some(raw) => Self::decode(&raw),
            None => Err(DomainError::Auth(AuthError::AccountNotFound)),
        }
    }

    async fn reissue_otp(
        &self,
        id_num: &str,
        otp_hash: &str,
        otp_expires_at: DateTime<Utc>,
    ) -> Result<Account, DomainError> {
        let mut conn = self.conn.clone();
        let updated: Option<String> = Script::new(REISSUE_OTP_SCRIPT)
            .key(self.key_for(id_num))
            .arg(otp_hash)
            .arg(otp_expires_at.to_rfc3339())
            .arg(Utc::now().to_rfc3339())
            .invoke_async(&mut conn)
            .await
            .map_err(Self::store_err)?;

        match updated.as_deref() {
            Some("ALREADY_ACTIVATED") => Err(DomainError::Auth(AuthError::AlreadyActivated)),
            Some(raw) => Self::decode(raw),
            None => Err(DomainError::Auth(AuthError::AccountNotFound)),
        }
    }
}
