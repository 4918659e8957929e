//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! assembles the Actix-web application around it.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ig_core::repositories::CredentialStore;
use ig_core::services::compute::ComputeBackend;
use ig_core::services::gateway::GatewayService;

use crate::routes::{health::health, inference::inference, login::login, me::me};

/// Shared state handed to every handler
pub struct AppState<U, B>
where
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    /// The gateway every protected call goes through
    pub gateway: Arc<GatewayService<U, B>>,
    /// Deadline applied to each backend dispatch
    pub compute_timeout: Duration,
}

impl<U, B> AppState<U, B>
where
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    pub fn new(gateway: Arc<GatewayService<U, B>>, compute_timeout: Duration) -> Self {
        Self {
            gateway,
            compute_timeout,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, B>(
    app_state: web::Data<AppState<U, B>>,
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
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/token", web::post().to(login::<U, B>))
        .route("/inference", web::post().to(inference::<U, B>))
        .route("/users/me", web::get().to(me::<U, B>))
        .route("/health", web::get().to(health::<U, B>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
