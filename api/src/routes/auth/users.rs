use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use crate::dto::auth::{GetUserTypeRequest, UserTypeResponse};
use crate::handlers::{domain_error_to_response, validation_error_response};
use crate::routes::auth::AppState;

use mm_core::domain::entities::account::AccountView;
use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_shared::types::ApiResponse;

#[derive(Debug, Serialize)]
struct UserEnvelope {
    user: AccountView,
}

/// Handler for POST /api/v1/auth/get-usertype
pub async fn get_usertype<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<GetUserTypeRequest>,
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
        .get_user_type_by_id(&request.id_num)
        .await
    {
        Ok(user_type) => HttpResponse::Ok().json(ApiResponse::success(UserTypeResponse {
            type_of_user: user_type.as_str().to_string(),
        })),
        Err(error) => domain_error_to_response(&error),
    }
}

/// Handler for GET /api/v1/auth/user/{idNum}
///
/// Returns the account record with all credential material stripped.
pub async fn get_user<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    H: CredentialHasher + 'static,
{
    let id_num = path.into_inner();

    match state.onboarding_service.get_user_by_id(&id_num).await {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(UserEnvelope { user: view })),
        Err(error) => domain_error_to_response(&error),
    }
}
