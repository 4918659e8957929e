use actix_web::{web, HttpResponse};

use ig_core::repositories::CredentialStore;
use ig_core::services::compute::ComputeBackend;

use crate::app::AppState;

/// Handler for GET /health
///
/// Unauthenticated liveness probe. Reports whether the compute backend is
/// ready to serve.
pub async fn health<U, B>(state: web::Data<AppState<U, B>>) -> HttpResponse
where
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "model_ready": state.gateway.backend_ready().await,
        "service": "infergate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
