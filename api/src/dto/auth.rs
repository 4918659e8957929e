//! Authentication DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /token`
///
/// ```json
/// {
///     "username": "testuser",
///     "password": "testpassword"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
