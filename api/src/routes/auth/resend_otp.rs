use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{MessageResponse, ResendOtpRequest};
use crate::handlers::{domain_error_to_response, validation_error_response};
use crate::routes::auth::AppState;

use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_shared::types::ApiResponse;

/// Handler for POST /api/v1/auth/resend-otp
///
/// Issues a fresh OTP for a pending account and emails it. The previous
/// code is invalidated even if it had not expired. Activated accounts
/// are refused with `ALREADY_ACTIVATED`.
pub async fn resend_otp<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<ResendOtpRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    H: CredentialHasher + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.onboarding_service.resend_otp(&request.id_num).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "A new OTP has been sent to your email.",
        ))),
        Err(error) => domain_error_to_response(&error),
    }
}
