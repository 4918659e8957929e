//! Compute backend implementations.

pub mod linear;

pub use linear::LinearModel;
