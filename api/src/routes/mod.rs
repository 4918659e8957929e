//! Route handlers
//!
//! One module per endpoint:
//! - `login` — POST /token
//! - `inference` — POST /inference
//! - `me` — GET /users/me
//! - `health` — GET /health

pub mod health;
pub mod inference;
pub mod login;
pub mod me;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};

use ig_core::errors::TokenError;

use crate::handlers::domain_error_response;

/// Pull the bearer token out of the `Authorization` header
///
/// A missing header, a non-bearer scheme, or a non-ASCII value all fail the
/// same way a tampered token would.
pub(crate) fn bearer_token(req: &HttpRequest) -> Result<String, HttpResponse> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
        .ok_or_else(|| domain_error_response(&TokenError::Malformed.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_extracted() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let response = bearer_token(&req).unwrap_err();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_basic_scheme_is_rejected() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_err());
    }
}
