use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, MessageResponse};
use crate::handlers::{domain_error_to_response, validation_error_response};
use crate::routes::auth::AppState;

use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_shared::types::ApiResponse;

/// Handler for POST /api/v1/auth/login
///
/// Verifies the password for an activated account. Unknown id numbers,
/// unactivated accounts, and wrong passwords all answer with the same
/// `INVALID_CREDENTIALS` code.
pub async fn login<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.id_num, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Login successful.",
        ))),
        Err(error) => domain_error_to_response(&error),
    }
}
