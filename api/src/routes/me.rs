use actix_web::{web, HttpRequest, HttpResponse};

use ig_core::repositories::CredentialStore;
use ig_core::services::compute::ComputeBackend;

use crate::app::AppState;
use crate::dto::UserResponse;
use crate::handlers::domain_error_response;
use crate::routes::bearer_token;

/// Handler for GET /users/me
///
/// Resolves the bearer token to the caller's stored profile. The password
/// hash never leaves the server.
///
/// ## Errors
/// - 401 Unauthorized: invalid token, or the account is gone or disabled
pub async fn me<U, B>(req: HttpRequest, state: web::Data<AppState<U, B>>) -> HttpResponse
where
    U: CredentialStore + 'static,
    B: ComputeBackend + 'static,
{
    let token = match bearer_token(&req) {
        Ok(token) => token,
        Err(response) => return response,
    };

    match state.gateway.current_user(&token).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => domain_error_response(&error),
    }
}
