//! Compute backend trait: the opaque capability the gateway dispatches to.

use async_trait::async_trait;

use crate::errors::ComputeError;

/// An inference backend the gateway forwards admitted requests to
///
/// The gateway treats this as a bounded operation: when the caller supplies a
/// deadline, the gateway races it against the `infer` future and reports
/// `Cancelled` if the deadline wins. Implementations should therefore be
/// cancel-safe.
#[async_trait]
pub trait ComputeBackend: Send + Sync {
    /// Run inference over the input vector
    async fn infer(&self, input: &[f32]) -> Result<Vec<f32>, ComputeError>;

    /// Whether the backend is loaded and able to serve requests
    async fn is_ready(&self) -> bool;
}
