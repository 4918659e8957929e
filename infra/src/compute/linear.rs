//! A single-layer linear model serving as the inference backend.
//!
//! Stands in for a real model runtime: one dense layer mapping the input
//! vector to a scalar prediction. Weights are fixed at construction, so the
//! model is read-only and freely shared across request tasks.

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use ig_core::errors::ComputeError;
use ig_core::services::compute::ComputeBackend;

/// Linear model: `prediction = weights . input + bias`
pub struct LinearModel {
    weights: Vec<f32>,
    bias: f32,
}

impl LinearModel {
    /// Creates a model with randomly initialized weights for `dimension`
    /// inputs
    pub fn new(dimension: usize) -> Self {
        let mut rng = rand::thread_rng();
        let weights = (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let bias = rng.gen_range(-1.0..1.0);
        info!(dimension, "linear model initialized");
        Self { weights, bias }
    }

    /// Creates a model with explicit weights and bias
    pub fn with_weights(weights: Vec<f32>, bias: f32) -> Self {
        Self { weights, bias }
    }

    /// Input dimension the model accepts
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }
}

#[async_trait]
impl ComputeBackend for LinearModel {
    async fn infer(&self, input: &[f32]) -> Result<Vec<f32>, ComputeError> {
        if input.len() != self.weights.len() {
            return Err(ComputeError::Failed(format!(
                "expected {} inputs, got {}",
                self.weights.len(),
                input.len()
            )));
        }

        let dot: f32 = self
            .weights
            .iter()
            .zip(input)
            .map(|(w, x)| w * x)
            .sum();
        Ok(vec![dot + self.bias])
    }

    async fn is_ready(&self) -> bool {
        !self.weights.is_empty()
    }
}
