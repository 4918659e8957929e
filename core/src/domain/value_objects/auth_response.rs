//! Authentication response returned by a successful login.

use serde::{Deserialize, Serialize};

/// Bearer token kind reported to clients
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Successful login response: the issued token plus its lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token
    pub access_token: String,

    /// Token kind ("bearer")
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates a bearer-token response
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_response() {
        let response = AuthResponse::bearer("jwt".to_string(), 1800);
        assert_eq!(response.token_type, TOKEN_TYPE_BEARER);
        assert_eq!(response.expires_in, 1800);
    }
}
