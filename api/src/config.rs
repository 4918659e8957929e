//! Environment-driven settings for the API binary.
//!
//! Every value is read once at startup; nothing here is re-read or mutated
//! while the server runs.

use std::env;

use ig_shared::{AuthConfig, RateLimitConfig, ServerConfig};

/// Complete settings for the API server
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    /// Input vector length the gateway enforces before dispatch
    pub input_dimension: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            rate_limit: RateLimitConfig::default(),
            input_dimension: 10,
        }
    }
}

impl AppSettings {
    /// Load settings from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let server = ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
            port: parse_var("SERVER_PORT", defaults.server.port),
            workers: parse_var("SERVER_WORKERS", defaults.server.workers),
            compute_timeout_ms: parse_var("IG_COMPUTE_TIMEOUT_MS", defaults.server.compute_timeout_ms),
        };

        let auth = AuthConfig {
            jwt_secret: env::var("IG_JWT_SECRET").unwrap_or(defaults.auth.jwt_secret),
            token_ttl_minutes: parse_var("IG_TOKEN_TTL_MINUTES", defaults.auth.token_ttl_minutes),
            issuer: defaults.auth.issuer,
            audience: defaults.auth.audience,
        };

        let rate_limit = RateLimitConfig {
            enabled: parse_var("IG_RATE_LIMIT_ENABLED", defaults.rate_limit.enabled),
            requests_per_window: parse_var("IG_RATE_LIMIT", defaults.rate_limit.requests_per_window),
            window_seconds: parse_var("IG_RATE_WINDOW_SECONDS", defaults.rate_limit.window_seconds),
            throttle_login: parse_var("IG_THROTTLE_LOGIN", defaults.rate_limit.throttle_login),
            login_attempts_per_window: parse_var(
                "IG_LOGIN_RATE_LIMIT",
                defaults.rate_limit.login_attempts_per_window,
            ),
        };

        Self {
            server,
            auth,
            rate_limit,
            input_dimension: parse_var("IG_INPUT_DIMENSION", defaults.input_dimension),
        }
    }
}

/// Parse an environment variable, falling back on absence or parse failure
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparseable value for {}", name);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let settings = AppSettings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.auth.token_ttl_minutes, 30);
        assert_eq!(settings.rate_limit.requests_per_window, 5);
        assert_eq!(settings.input_dimension, 10);
    }
}
