use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use mm_api::app::create_app;
use mm_api::routes::auth::AppState;
use mm_core::services::onboarding::{OnboardingConfig, OnboardingService};
use mm_infra::crypto::BcryptHasher;
use mm_infra::email::create_email_service;
use mm_infra::store::RedisAccountRepository;
use mm_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting MeetMe API server ({:?} environment)",
        config.environment
    );

    let account_repository = Arc::new(RedisAccountRepository::connect(&config.store).await?);
    let email_service = Arc::new(create_email_service(&config.email)?);
    let hasher = Arc::new(BcryptHasher::new());

    let onboarding_service = Arc::new(OnboardingService::new(
        account_repository,
        email_service,
        hasher,
        OnboardingConfig::default(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server listening on {bind_address}");

    let server = HttpServer::new(move || {
        let state = web::Data::new(AppState {
            onboarding_service: onboarding_service.clone(),
        });
        create_app(state)
    });

    let server = if config.server.workers > 0 {
        server.workers(config.server.workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
