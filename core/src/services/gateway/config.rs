//! Configuration for the gateway service

/// Configuration for the gateway service
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Required length of the inference input vector
    pub input_dimension: usize,
    /// Whether inference calls are rate limited
    pub rate_limit_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            input_dimension: 10,
            rate_limit_enabled: true,
        }
    }
}
