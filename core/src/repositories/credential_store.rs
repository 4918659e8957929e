//! Credential store trait defining the interface for identity lookups.
//!
//! The gateway only ever reads identities; provisioning and deletion are the
//! store's concern. Implementations must be safe to share across request
//! tasks, which is trivial for read-only stores.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Lookup interface over the set of identities known to the gateway
///
/// The in-memory implementation lives in the infrastructure crate; swapping
/// in a persistent store must not require touching the gateway or token
/// logic.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find an identity by its unique username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - identity found (active or not)
    /// * `Ok(None)` - no identity with that username
    /// * `Err(DomainError)` - the store itself failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
