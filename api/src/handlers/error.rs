//! Domain error to HTTP response mapping.
//!
//! One function owns the whole taxonomy so every route fails with the same
//! status codes and the same JSON body shape.

use actix_web::http::header;
use actix_web::HttpResponse;

use ig_core::errors::DomainError;
use ig_shared::ErrorResponse;

/// Convert a domain error into the HTTP response the API contract promises
///
/// - credential and token failures -> 401 with a `WWW-Authenticate` challenge
/// - throttling -> 429 with a `Retry-After` header
/// - malformed payloads -> 400
/// - compute and internal failures -> 500
/// - deadline expiry -> 503
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let body = ErrorResponse::from(error);

    match error {
        DomainError::Auth(_) | DomainError::Token(_) => {
            log::warn!("rejected request: {}", error);
            HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
                .json(body)
        }
        DomainError::Throttled { retry_after_seconds } => {
            log::warn!("throttled request, retry in {}s", retry_after_seconds);
            HttpResponse::TooManyRequests()
                .insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()))
                .json(body)
        }
        DomainError::InvalidRequest { .. } => {
            log::warn!("rejected request: {}", error);
            HttpResponse::BadRequest().json(body)
        }
        DomainError::Compute { .. } | DomainError::Internal { .. } => {
            log::error!("request failed: {}", error);
            HttpResponse::InternalServerError().json(body)
        }
        DomainError::Cancelled => {
            log::warn!("request cancelled by deadline");
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}
