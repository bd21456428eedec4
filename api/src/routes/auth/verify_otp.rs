use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{MessageResponse, VerifyOtpRequest};
use crate::handlers::{domain_error_to_response, validation_error_response};
use crate::routes::auth::AppState;

use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_shared::types::ApiResponse;

/// Handler for POST /api/v1/auth/verify-otp
///
/// Checks the submitted code against the stored hash. The record is not
/// mutated: the code stays valid until the password is set or a new code
/// is issued. All failure modes answer with the same
/// `INVALID_OR_EXPIRED_OTP` code.
pub async fn verify_otp<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    H: CredentialHasher + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .onboarding_service
        .verify_otp(&request.id_num, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "OTP verified successfully.",
        ))),
        Err(error) => domain_error_to_response(&error),
    }
}
