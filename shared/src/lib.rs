//! Shared configuration and common types for the InferGate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (auth, rate limiting, server)
//! - Error response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, RateLimitConfig, ServerConfig};
pub use types::ErrorResponse;
