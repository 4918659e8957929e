//! # InferGate Core
//!
//! Core domain layer for the InferGate gateway. This crate contains the
//! domain entities, the error taxonomy, the credential-store and
//! compute-backend seams, and the three services the gateway composes:
//! token issuance/validation, fixed-window rate limiting, and the
//! orchestrating gateway itself.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
