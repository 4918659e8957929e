//! # InferGate Infrastructure
//!
//! Concrete implementations of the core seams: an in-memory credential
//! store seeded at startup and a linear-model compute backend.

pub mod compute;
pub mod store;

pub use compute::LinearModel;
pub use store::InMemoryCredentialStore;
