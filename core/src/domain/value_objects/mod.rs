//! Value objects returned by the gateway services.

pub mod auth_response;

pub use auth_response::AuthResponse;
