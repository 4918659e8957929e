//! Domain entities

pub mod inference;
pub mod token;
pub mod user;

pub use inference::{InferenceRequest, InferenceResult};
pub use token::Claims;
pub use user::User;
