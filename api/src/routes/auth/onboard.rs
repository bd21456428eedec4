use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth::{MessageResponse, OnboardRequest};
use crate::handlers::{domain_error_to_response, validation_error_response};

use mm_core::domain::entities::account::UserType;
use mm_core::errors::{DomainError, ValidationError};
use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_core::services::onboarding::OnboardingService;
use mm_shared::types::ApiResponse;

/// Application state holding the shared onboarding service
pub struct AppState<A, E, H>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    H: CredentialHasher,
{
    pub onboarding_service: Arc<OnboardingService<A, E, H>>,
}

/// Handler for POST /api/v1/auth/onboard
///
/// Creates a pending account keyed by id number and emails a one-time
/// code to the supplied address. Responds 400 with `ALREADY_EXISTS`
/// when the id number is already registered.
pub async fn onboard<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<OnboardRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    H: CredentialHasher + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    let user_type = match UserType::parse(&request.type_of_user) {
        Some(user_type) => user_type,
        None => {
            return domain_error_to_response(&DomainError::ValidationErr(
                ValidationError::InvalidUserType {
                    value: request.type_of_user.clone(),
                },
            ))
        }
    };

    match state
        .onboarding_service
        .onboard(
            &request.id_num,
            &request.name,
            &request.surname,
            user_type,
            &request.course,
            &request.email,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Account created. An OTP has been sent to your email.",
        ))),
        Err(error) => domain_error_to_response(&error),
    }
}
