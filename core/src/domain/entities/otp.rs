//! One-time passcode generation for email verification.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;

/// Length of the passcode
pub const OTP_CODE_LENGTH: usize = 6;

/// Fixed time-to-live for a passcode (10 minutes)
pub const OTP_EXPIRATION_MINUTES: i64 = 10;

/// Lowercase alphanumeric alphabet the code is drawn from
const OTP_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A freshly generated plaintext passcode with its expiry.
///
/// The plaintext only lives long enough to be hashed and emailed; the store
/// keeps the hash and the expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode {
    /// The plaintext code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires (`issued_at` + fixed TTL)
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Generate a new code from the OS cryptographic RNG
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let code: String = (0..OTP_CODE_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..OTP_CHARSET.len());
                OTP_CHARSET[idx] as char
            })
            .collect();

        let issued_at = Utc::now();
        Self {
            code,
            issued_at,
            expires_at: issued_at + Duration::minutes(OTP_EXPIRATION_MINUTES),
        }
    }

    /// Whether the code has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
