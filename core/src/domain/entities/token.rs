//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime (30 minutes)
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// JWT issuer
pub const JWT_ISSUER: &str = "infergate";

/// JWT audience
pub const JWT_AUDIENCE: &str = "infergate-api";

/// Claims structure for the JWT payload
///
/// Tokens are stateless: once issued, expiry is the only thing that stops
/// them validating. None of these fields may be trusted before the signature
/// has verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username of the authenticated caller)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a freshly authenticated caller
    pub fn new(username: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: username.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
