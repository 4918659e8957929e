//! Domain-specific error types and error handling.

use ig_shared::ErrorResponse;
use thiserror::Error;

/// Authentication errors
///
/// Unknown username, inactive account, and wrong password all collapse into
/// the single `InvalidCredentials` variant so the error shape carries no
/// user-enumeration signal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Token validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed or tampered token")]
    Malformed,
}

/// Compute backend errors, as reported by a `ComputeBackend` implementation
#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("compute backend is not ready")]
    NotReady,

    #[error("inference failed: {0}")]
    Failed(String),
}

/// Core domain errors (the full gateway taxonomy)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Rate limit exceeded, retry in {retry_after_seconds}s")]
    Throttled { retry_after_seconds: u64 },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Inference failed: {message}")]
    Compute { message: String },

    #[error("Request cancelled before completion")]
    Cancelled,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for this error, used in API responses
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Throttled { .. } => "rate_limit_exceeded",
            DomainError::InvalidRequest { .. } => "invalid_request",
            DomainError::Compute { .. } => "inference_failed",
            DomainError::Cancelled => "request_cancelled",
            DomainError::Internal { .. } => "internal_error",
            DomainError::Auth(AuthError::InvalidCredentials) => "invalid_credentials",
            DomainError::Token(TokenError::Expired) => "token_expired",
            DomainError::Token(TokenError::Malformed) => "token_malformed",
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let response = ErrorResponse::new(err.code(), err.to_string());
        match err {
            DomainError::Throttled { retry_after_seconds } => {
                response.with_detail("retry_after_seconds", serde_json::json!(retry_after_seconds))
            }
            _ => response,
        }
    }
}
