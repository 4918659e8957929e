//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `rate_limit` - Fixed-window rate limiting configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
