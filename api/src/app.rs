//! Application factory
//!
//! Builds the actix-web App with all routes, middleware, and shared
//! state. Generic over the store, mailer, and hasher so integration
//! tests can run the full HTTP surface against in-memory fakes.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use chrono::Utc;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    login::login, onboard::onboard, resend_otp::resend_otp, set_password::set_password,
    users::{get_user, get_usertype}, verify_otp::verify_otp, AppState,
};

use mm_core::repositories::AccountRepository;
use mm_core::services::crypto::CredentialHasher;
use mm_core::services::email::EmailServiceTrait;
use mm_shared::types::{ErrorResponse, HealthResponse};

/// Create and configure the application with all dependencies
pub fn create_app<A, E, H>(
    app_state: web::Data<AppState<A, E, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    H: CredentialHasher + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/onboard", web::post().to(onboard::<A, E, H>))
                    .route("/verify-otp", web::post().to(verify_otp::<A, E, H>))
                    .route("/set-password", web::post().to(set_password::<A, E, H>))
                    .route("/login", web::post().to(login::<A, E, H>))
                    .route("/resend-otp", web::post().to(resend_otp::<A, E, H>))
                    .route("/get-usertype", web::post().to(get_usertype::<A, E, H>))
                    .route("/user/{idNum}", web::get().to(get_user::<A, E, H>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "meetme-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
