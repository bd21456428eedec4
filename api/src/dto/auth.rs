//! Onboarding request and response bodies
//!
//! All bodies use camelCase field names on the wire. Length bounds here
//! only catch absurd input early; the real rules (required fields, email
//! format, user type vocabulary) are enforced by the core service.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    /// Institutional identity number, the account key
    #[validate(length(max = 64))]
    pub id_num: String,

    #[validate(length(max = 128))]
    pub name: String,

    #[validate(length(max = 128))]
    pub surname: String,

    /// One of "student", "lecturer", "advisor" (case-insensitive)
    pub type_of_user: String,

    #[validate(length(max = 128))]
    pub course: String,

    #[validate(length(max = 254))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(max = 64))]
    pub id_num: String,

    /// 6-character one-time code
    #[validate(length(max = 32))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    #[validate(length(max = 64))]
    pub id_num: String,

    #[validate(length(max = 256))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(max = 64))]
    pub id_num: String,

    #[validate(length(max = 256))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    #[validate(length(max = 64))]
    pub id_num: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetUserTypeRequest {
    #[validate(length(max = 64))]
    pub id_num: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTypeResponse {
    pub type_of_user: String,
}
