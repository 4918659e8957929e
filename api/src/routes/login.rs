use actix_web::{web, HttpResponse};

use ig_core::repositories::CredentialStore;
use ig_core::services::compute::ComputeBackend;

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::domain_error_response;

/// Handler for POST /token
///
/// Verifies the caller's credentials and issues a signed bearer token.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "testuser",
///     "password": "testpassword"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJhbGciOiJIUzI1NiIs...",
///     "token_type": "bearer",
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown user, disabled account, or wrong password
/// - 429 Too Many Requests: login attempts throttled for this username
pub async fn login<U, B>(
    state: web::Data<AppState<U, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    match state
        .gateway
        .login(&request.username, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(auth),
        Err(error) => domain_error_response(&error),
    }
}
