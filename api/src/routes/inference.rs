use actix_web::{web, HttpRequest, HttpResponse};

use ig_core::domain::entities::inference::InferenceRequest;
use ig_core::repositories::CredentialStore;
use ig_core::services::compute::ComputeBackend;

use crate::app::AppState;
use crate::handlers::domain_error_response;
use crate::routes::bearer_token;

/// Handler for POST /inference
///
/// Runs one model inference for an authenticated caller. The gateway
/// validates the bearer token, admits the call through the per-identity
/// rate limiter, checks the input shape, and dispatches to the model.
///
/// # Request Body
///
/// ```json
/// {
///     "input_data": [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "prediction": [0.42],
///     "model_version": "v1"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: input vector has the wrong number of elements
/// - 401 Unauthorized: missing, malformed, or expired token
/// - 429 Too Many Requests: rate limit exceeded (see `Retry-After`)
/// - 500 Internal Server Error: the model failed
/// - 503 Service Unavailable: the call hit its deadline
pub async fn inference<U, B>(
    req: HttpRequest,
    state: web::Data<AppState<U, B>>,
    request: web::Json<InferenceRequest>,
) -> HttpResponse
where
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    let token = match bearer_token(&req) {
        Ok(token) => token,
        Err(response) => return response,
    };

    match state
        .gateway
        .invoke(&token, &request, Some(state.compute_timeout))
        .await
    {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(error) => domain_error_response(&error),
    }
}
