//! Account entity and its activation state machine.
//!
//! An account moves through three states, keyed by which credential fields
//! are populated:
//!
//! - `PendingVerification`: created by onboarding, `otp_hash` set,
//!   `password_hash` null.
//! - `Activated`: `password_hash` set, both OTP fields cleared.
//!
//! The "Unregistered" state is the absence of a record. Activation is the
//! terminal usable state; pending accounts may loop through OTP reissue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of the account holder within the institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Student,
    Lecturer,
    Advisor,
}

impl UserType {
    /// Parse from a request string, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(UserType::Student),
            "lecturer" => Some(UserType::Lecturer),
            "advisor" => Some(UserType::Advisor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Lecturer => "Lecturer",
            UserType::Advisor => "Advisor",
        }
    }
}

/// Activation state derived from the credential fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    PendingVerification,
    Activated,
}

/// Account record, keyed by the externally supplied `id_num`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Externally assigned unique identifier (primary key)
    pub id_num: String,

    /// Given name, set once at onboarding
    pub name: String,

    /// Family name, set once at onboarding
    pub surname: String,

    /// Role of the account holder
    pub user_type: UserType,

    /// Course or department the account belongs to
    pub course: String,

    /// Email address the OTP is delivered to
    pub email: String,

    /// Salted hash of the pending OTP, or None when no OTP is pending
    pub otp_hash: Option<String>,

    /// Absolute expiry of the pending OTP
    pub otp_expires_at: Option<DateTime<Utc>>,

    /// Salted hash of the account password, None until activation
    pub password_hash: Option<String>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new pending account with an already-hashed OTP
    pub fn new(
        id_num: String,
        name: String,
        surname: String,
        user_type: UserType,
        course: String,
        email: String,
        otp_hash: String,
        otp_expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id_num,
            name,
            surname,
            user_type,
            course,
            email,
            otp_hash: Some(otp_hash),
            otp_expires_at: Some(otp_expires_at),
            password_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current activation state
    pub fn status(&self) -> AccountStatus {
        if self.password_hash.is_some() {
            AccountStatus::Activated
        } else {
            AccountStatus::PendingVerification
        }
    }

    /// Whether the account has completed activation
    pub fn is_activated(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Whether an OTP is currently pending and unexpired
    pub fn has_usable_otp(&self) -> bool {
        match (&self.otp_hash, &self.otp_expires_at) {
            (Some(_), Some(expires_at)) => Utc::now() < *expires_at,
            _ => false,
        }
    }

    /// Replace the pending OTP fields with a freshly issued pair
    pub fn reissue_otp(&mut self, otp_hash: String, otp_expires_at: DateTime<Utc>) {
        self.otp_hash = Some(otp_hash);
        self.otp_expires_at = Some(otp_expires_at);
        self.updated_at = Utc::now();
    }

    /// Transition to Activated: set the password hash and clear both OTP
    /// fields in one step (mutual-exclusion invariant)
    pub fn activate(&mut self, password_hash: String) {
        self.password_hash = Some(password_hash);
        self.otp_hash = None;
        self.otp_expires_at = None;
        self.updated_at = Utc::now();
    }

    /// Credential-free view of the account, safe to return to clients
    pub fn view(&self) -> AccountView {
        AccountView {
            id_num: self.id_num.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            user_type: self.user_type,
            course: self.course.clone(),
            email: self.email.clone(),
            status: self.status(),
            created_at: self.created_at,
        }
    }
}

/// Account view with all credential material stripped.
///
/// Never contains `password_hash`, `otp_hash` or `otp_expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id_num: String,
    pub name: String,
    pub surname: String,
    pub user_type: UserType,
    pub course: String,
    pub email: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pending_account() -> Account {
        Account::new(
            "S100".to_string(),
            "Ann".to_string(),
            "Lee".to_string(),
            UserType::Student,
            "CS".to_string(),
            "a@x.com".to_string(),
            "hashed-otp".to_string(),
            Utc::now() + Duration::minutes(10),
        )
    }

    #[test]
    fn test_new_account_is_pending() {
        let account = pending_account();
        assert_eq!(account.status(), AccountStatus::PendingVerification);
        assert!(!account.is_activated());
        assert!(account.has_usable_otp());
        assert!(account.password_hash.is_none());
    }

    #[test]
    fn test_activate_clears_otp_fields() {
        let mut account = pending_account();
        account.activate("hashed-password".to_string());

        assert_eq!(account.status(), AccountStatus::Activated);
        assert!(account.otp_hash.is_none());
        assert!(account.otp_expires_at.is_none());
        assert!(!account.has_usable_otp());
    }

    #[test]
    fn test_expired_otp_is_not_usable() {
        let mut account = pending_account();
        account.otp_expires_at = Some(Utc::now() - Duration::seconds(1));
        assert!(!account.has_usable_otp());
    }

    #[test]
    fn test_reissue_replaces_otp_pair() {
        let mut account = pending_account();
        let old_hash = account.otp_hash.clone();

        account.reissue_otp(
            "fresh-hash".to_string(),
            Utc::now() + Duration::minutes(10),
        );

        assert_ne!(account.otp_hash, old_hash);
        assert!(account.has_usable_otp());
        assert_eq!(account.status(), AccountStatus::PendingVerification);
    }

    #[test]
    fn test_user_type_parsing() {
        assert_eq!(UserType::parse("Student"), Some(UserType::Student));
        assert_eq!(UserType::parse("lecturer"), Some(UserType::Lecturer));
        assert_eq!(UserType::parse(" ADVISOR "), Some(UserType::Advisor));
        assert_eq!(UserType::parse("admin"), None);
    }

    #[test]
    fn test_view_contains_no_credential_material() {
        let account = pending_account();
        let json = serde_json::to_value(account.view()).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("otpHash").is_none());
        assert!(json.get("otpExpiresAt").is_none());
        assert_eq!(json["idNum"], "S100");
        assert_eq!(json["userType"], "Student");
    }
}
