use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{MessageResponse, SetPasswordRequest};
use crate::handlers::{domain_error_to_response, validation_error_response};
use crate::routes::auth::AppState;

use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_shared::types::ApiResponse;

/// Handler for POST /api/v1/auth/set-password
///
/// Stores the password hash and clears the pending OTP in one atomic
/// update, moving the account to Activated.
pub async fn set_password<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<SetPasswordRequest>,
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
        .set_password(&request.id_num, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Password set. Your account is now active.",
        ))),
        Err(error) => domain_error_to_response(&error),
    }
}
