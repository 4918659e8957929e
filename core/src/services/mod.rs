//! Gateway services: token handling, rate limiting, compute seam, and the
//! orchestrating gateway.

pub mod compute;
pub mod gateway;
pub mod rate_limit;
pub mod token;

pub use compute::ComputeBackend;
pub use gateway::{GatewayConfig, GatewayService};
pub use rate_limit::{Admission, FixedWindowLimiter};
pub use token::{TokenService, TokenServiceConfig};
