//! Repository interfaces decoupling the domain from storage.

pub mod credential_store;

pub use credential_store::CredentialStore;
