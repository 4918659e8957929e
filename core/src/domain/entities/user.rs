//! User entity representing a caller known to the gateway.

use serde::{Deserialize, Serialize};

/// A registered caller identity
///
/// Records are created when the credential store is seeded and never mutated
/// by the gateway core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique caller name
    pub username: String,

    /// bcrypt hash of the caller's password
    pub password_hash: String,

    /// Optional display name
    pub full_name: Option<String>,

    /// Optional contact email
    pub email: Option<String>,

    /// Whether the account may authenticate
    pub active: bool,
}

impl User {
    /// Creates a new active user with no profile fields
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            full_name: None,
            email: None,
            active: true,
        }
    }

    /// Sets the profile fields
    pub fn with_profile(
        mut self,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.full_name = Some(full_name.into());
        self.email = Some(email.into());
        self
    }

    /// Marks the account as disabled
    pub fn disabled(mut self) -> Self {
        self.active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new("alice", "$2b$12$hash");
        assert_eq!(user.username, "alice");
        assert!(user.active);
        assert!(user.full_name.is_none());
        assert!(user.email.is_none());
    }

    #[test]
    fn test_profile_and_disabled_builders() {
        let user = User::new("bob", "hash")
            .with_profile("Bob Example", "bob@example.com")
            .disabled();

        assert_eq!(user.full_name.as_deref(), Some("Bob Example"));
        assert_eq!(user.email.as_deref(), Some("bob@example.com"));
        assert!(!user.active);
    }
}
