//! Central mapping from domain errors to HTTP responses
//!
//! Every route funnels failures through `domain_error_to_response` so
//! status codes and error codes stay consistent across the API. Server
//! faults are logged with full detail but answered with a generic
//! message so internals never reach the client.

use actix_web::HttpResponse;
use std::collections::HashMap;

use mm_core::errors::{AuthError, DomainError, ValidationError};
use mm_shared::types::ErrorResponse;

/// Translate a domain error into the standard error envelope
pub fn domain_error_to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_to_response(auth),
        DomainError::ValidationErr(validation) => validation_to_response(validation),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            format!("{resource} not found"),
        )),
        DomainError::Database { message } => {
            log::error!("store failure: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "DATABASE_ERROR",
                "A storage error occurred. Please try again later.",
            ))
        }
        DomainError::Internal { message } => {
            log::error!("internal failure: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred. Please try again later.",
            ))
        }
    }
}

fn auth_error_to_response(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::AccountAlreadyExists => HttpResponse::BadRequest().json(ErrorResponse::new(
            "ALREADY_EXISTS",
            "An account with this id number already exists",
        )),
        AuthError::AccountNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            "No account exists for this id number",
        )),
        // Deliberately vague: wrong, expired, consumed, and unknown
        // account all read the same to the caller
        AuthError::InvalidOrExpiredOtp => HttpResponse::BadRequest().json(ErrorResponse::new(
            "INVALID_OR_EXPIRED_OTP",
            "Invalid or expired OTP",
        )),
        AuthError::InvalidCredentials => HttpResponse::BadRequest().json(ErrorResponse::new(
            "INVALID_CREDENTIALS",
            "Invalid credentials",
        )),
        AuthError::AlreadyActivated => HttpResponse::BadRequest().json(ErrorResponse::new(
            "ALREADY_ACTIVATED",
            "This account has already been activated",
        )),
        AuthError::EmailServiceFailure => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "EMAIL_SERVICE_FAILURE",
                "Failed to send the OTP email. Please request a new code.",
            ))
        }
    }
}

fn validation_to_response(error: &ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", error.to_string()))
}

/// Build a 400 response for body-level validation failures
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut details: HashMap<String, serde_json::Value> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    HttpResponse::BadRequest().json(
        ErrorResponse::new("VALIDATION_ERROR", "Request body failed validation")
            .with_details(details),
    )
}
