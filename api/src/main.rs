use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use ig_api::app::{create_app, AppState};
use ig_api::config::AppSettings;
use ig_core::domain::entities::user::User;
use ig_core::services::gateway::{GatewayConfig, GatewayService};
use ig_core::services::rate_limit::FixedWindowLimiter;
use ig_core::services::token::{TokenService, TokenServiceConfig};
use ig_infra::compute::LinearModel;
use ig_infra::store::InMemoryCredentialStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting InferGate API Server");

    let settings = AppSettings::from_env();
    let bind_address = settings.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Development credential store. A deployment would swap in a store
    // backed by a real user database behind the same trait.
    let store = Arc::new(InMemoryCredentialStore::new().seed_user(
        User::new("testuser", "").with_profile("Test User", "testuser@example.com"),
        "testpassword",
    )?);

    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&settings.auth)));
    let limiter = Arc::new(FixedWindowLimiter::from_config(&settings.rate_limit));
    let backend = Arc::new(LinearModel::new(settings.input_dimension));

    let mut gateway = GatewayService::new(
        store,
        tokens,
        limiter,
        backend,
        GatewayConfig {
            input_dimension: settings.input_dimension,
            rate_limit_enabled: settings.rate_limit.enabled,
        },
    );
    if settings.rate_limit.throttle_login {
        gateway = gateway
            .with_login_limiter(Arc::new(FixedWindowLimiter::for_login(&settings.rate_limit)));
    }

    let compute_timeout = Duration::from_millis(settings.server.compute_timeout_ms);
    let app_state = web::Data::new(AppState::new(Arc::new(gateway), compute_timeout));
    let workers = settings.server.workers;

    HttpServer::new(move || create_app(app_state.clone()))
        .workers(workers)
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
