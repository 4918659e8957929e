//! Configuration for the token service

use ig_shared::AuthConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_TTL_MINUTES, JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub token_ttl_minutes: i64,
    /// Issuer claim stamped into and required from every token
    pub issuer: String,
    /// Audience claim stamped into and required from every token
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-change-in-production".to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_minutes: config.token_ttl_minutes,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}
