//! User-facing profile DTO.

use serde::{Deserialize, Serialize};

use ig_core::domain::entities::user::User;

/// Profile returned by `GET /users/me`
///
/// Deliberately omits the stored password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            active: user.active,
        }
    }
}
