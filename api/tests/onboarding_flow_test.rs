//! End-to-end onboarding flow over the real HTTP surface
//!
//! Runs the full actix app against the in-memory repository, the
//! capturing mock mailer, and a low-cost bcrypt hasher. The OTP is
//! read back out of the captured email, the way a user would read it
//! out of their inbox.

use actix_web::{test, web};
use serde_json::{json, Value};
use std::sync::Arc;

use mm_api::app::create_app;
use mm_api::routes::auth::AppState;
use mm_core::repositories::MockAccountRepository;
use mm_core::services::onboarding::{OnboardingConfig, OnboardingService};
use mm_infra::crypto::BcryptHasher;
use mm_infra::email::MockEmailService;

struct TestHarness {
    state: web::Data<AppState<MockAccountRepository, MockEmailService, BcryptHasher>>,
    email: MockEmailService,
}

fn harness() -> TestHarness {
    let repository = Arc::new(MockAccountRepository::new());
    let email = MockEmailService::new();
    let hasher = Arc::new(BcryptHasher::with_cost(4));

    let service = Arc::new(OnboardingService::new(
        repository,
        Arc::new(email.clone()),
        hasher,
        OnboardingConfig::default(),
    ));

    TestHarness {
        state: web::Data::new(AppState {
            onboarding_service: service,
        }),
        email,
    }
}

fn onboard_body(id_num: &str) -> Value {
    json!({
        "idNum": id_num,
        "name": "Ann",
        "surname": "Lee",
        "typeOfUser": "Student",
        "course": "CS",
        "email": "a@x.com"
    })
}

/// Pull the plaintext code out of a captured OTP email body
fn extract_otp(email: &MockEmailService) -> String {
    let body = email.last_email().expect("no email captured").body;
    body.split("Your OTP is: ")
        .nth(1)
        .and_then(|rest| rest.split('\n').next())
        .expect("email body did not contain an OTP")
        .trim()
        .to_string()
}

#[actix_rt::test]
async fn test_full_activation_flow() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    // Onboard creates a pending account and sends the OTP
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(onboard_body("S100"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(h.email.sent_count(), 1);

    // Duplicate onboarding is a conflict
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(onboard_body("S100"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_EXISTS");

    // A wrong code is rejected without detail
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/verify-otp")
            .set_json(json!({"idNum": "S100", "otp": "zzzzzz"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_OR_EXPIRED_OTP");

    // Resend issues a new code and kills the old one
    let first_otp = extract_otp(&h.email);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/resend-otp")
            .set_json(json!({"idNum": "S100"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(h.email.sent_count(), 2);
    let second_otp = extract_otp(&h.email);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/verify-otp")
            .set_json(json!({"idNum": "S100", "otp": first_otp}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/verify-otp")
            .set_json(json!({"idNum": "S100", "otp": second_otp}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Setting the password activates the account
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/set-password")
            .set_json(json!({"idNum": "S100", "password": "Secr3t!"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Login succeeds with the right password and fails closed otherwise
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"idNum": "S100", "password": "Secr3t!"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"idNum": "S100", "password": "wrong"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[actix_rt::test]
async fn test_resend_refused_after_activation() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(onboard_body("S200"))
            .to_request(),
    )
    .await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/set-password")
            .set_json(json!({"idNum": "S200", "password": "Secr3t!"}))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/resend-otp")
            .set_json(json!({"idNum": "S200"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_ACTIVATED");
}

#[actix_rt::test]
async fn test_user_lookups() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(onboard_body("S300"))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/get-usertype")
            .set_json(json!({"idNum": "S300"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["typeOfUser"], "Student");

    // Profile lookup must not leak credential material
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/user/S300")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let user = &body["data"]["user"];
    assert_eq!(user["idNum"], "S300");
    assert_eq!(user["status"], "pending_verification");
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("otpHash").is_none());

    // Unknown account is a 404
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/user/NOPE")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_onboard_email_outage_keeps_pending_record() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    h.email.set_simulate_failure(true);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(onboard_body("S400"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_SERVICE_FAILURE");

    // The record survived the outage; resend is the recovery path
    h.email.set_simulate_failure(false);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/resend-otp")
            .set_json(json!({"idNum": "S400"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(h.email.sent_count(), 1);
}

#[actix_rt::test]
async fn test_onboard_rejects_bad_input() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    // Unknown user type
    let mut body = onboard_body("S500");
    body["typeOfUser"] = json!("wizard");
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "VALIDATION_ERROR");

    // Missing required field
    let mut body = onboard_body("S500");
    body["course"] = json!("");
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/onboard")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    // Nothing was created or sent
    assert_eq!(h.email.sent_count(), 0);
}
