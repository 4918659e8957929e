//! Request/response DTOs for the API surface.

pub mod auth;
pub mod user;

pub use auth::LoginRequest;
pub use user::UserResponse;

// The shared error body every failing endpoint returns
pub use ig_shared::ErrorResponse;
