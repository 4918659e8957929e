//! In-memory credential store.
//!
//! Holds the identity set in a plain map built at startup. Read-only after
//! seeding, so it needs no locking; a persistent store can replace it
//! without touching the gateway.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::info;

use ig_core::domain::entities::user::User;
use ig_core::errors::{DomainError, DomainResult};
use ig_core::repositories::CredentialStore;

/// Credential store backed by an in-memory map seeded at construction
pub struct InMemoryCredentialStore {
    users: HashMap<String, User>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Creates a store from pre-built user records
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: HashMap<String, User> = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        info!(count = users.len(), "credential store seeded");
        Self { users }
    }

    /// Adds a user with a plaintext password, hashing it with bcrypt
    ///
    /// Intended for startup seeding only; the plaintext is dropped once the
    /// hash is computed.
    pub fn seed_user(mut self, user: User, password: &str) -> DomainResult<Self> {
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {e}"),
            })?;
        let user = User {
            password_hash,
            ..user
        };
        self.users.insert(user.username.clone(), user);
        Ok(self)
    }

    /// Number of identities in the store
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no identities
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_seeded_user() {
        let store = InMemoryCredentialStore::with_users([User::new(
            "testuser",
            "$2b$12$placeholderhash",
        )
        .with_profile("Test User", "testuser@example.com")]);

        let user = store.find_by_username("testuser").await.unwrap().unwrap();
        assert_eq!(user.username, "testuser");
        assert_eq!(user.email.as_deref(), Some("testuser@example.com"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_none() {
        let store = InMemoryCredentialStore::new();
        assert!(store.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_user_hashes_password() {
        let store = InMemoryCredentialStore::new()
            .seed_user(User::new("alice", ""), "plaintext")
            .unwrap();

        let user = store.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "plaintext");
        assert!(bcrypt::verify("plaintext", &user.password_hash).unwrap());
        assert!(!bcrypt::verify("other", &user.password_hash).unwrap());
    }
}
