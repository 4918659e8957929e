//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Fixed-window rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Max inference requests per identity per window
    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: u32,

    /// Window duration in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// Whether login attempts are throttled as well
    #[serde(default = "default_throttle_login")]
    pub throttle_login: bool,

    /// Max login attempts per identity per window (when login throttling is on)
    #[serde(default = "default_login_per_window")]
    pub login_attempts_per_window: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            requests_per_window: default_requests_per_window(),
            window_seconds: default_window_seconds(),
            throttle_login: default_throttle_login(),
            login_attempts_per_window: default_login_per_window(),
        }
    }
}

impl RateLimitConfig {
    /// Create a development configuration (more lenient limits)
    pub fn development() -> Self {
        Self {
            requests_per_window: 300,
            login_attempts_per_window: 100,
            ..Default::default()
        }
    }

    /// Create a production configuration (strict defaults)
    pub fn production() -> Self {
        Self::default()
    }
}

fn default_enabled() -> bool {
    true
}

fn default_requests_per_window() -> u32 {
    5
}

fn default_window_seconds() -> u64 {
    60
}

fn default_throttle_login() -> bool {
    true
}

fn default_login_per_window() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_five_per_minute() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.requests_per_window, 5);
        assert_eq!(config.window_seconds, 60);
        assert!(config.throttle_login);
    }
}
