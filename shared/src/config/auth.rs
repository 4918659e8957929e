//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// The signing secret and token lifetime are read once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-change-in-production"),
            token_ttl_minutes: default_token_ttl_minutes(),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = minutes;
        self
    }

    /// Token lifetime expressed in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_minutes * 60
    }
}

fn default_token_ttl_minutes() -> i64 {
    30
}

fn default_issuer() -> String {
    String::from("infergate")
}

fn default_audience() -> String {
    String::from("infergate-api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_thirty_minutes() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_minutes, 30);
        assert_eq!(config.token_ttl_seconds(), 1800);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AuthConfig::new("s3cret").with_ttl_minutes(5);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl_seconds(), 300);
    }
}
