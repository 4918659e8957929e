//! The gateway service orchestrating authentication, throttling, and
//! dispatch to the compute backend.

pub mod config;
pub mod service;

pub use config::GatewayConfig;
pub use service::GatewayService;
