//! Inference request and result payloads exchanged with the compute backend.

use serde::{Deserialize, Serialize};

/// Default model version when the caller does not specify one
pub const DEFAULT_MODEL_VERSION: &str = "v1";

/// An inference request payload
///
/// The gateway only enforces the structural precondition (fixed input
/// dimension); the payload is otherwise opaque to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Numeric input vector for the model
    pub input_data: Vec<f32>,

    /// Requested model version
    #[serde(default = "default_model_version")]
    pub model_version: String,
}

impl InferenceRequest {
    /// Creates a request for the default model version
    pub fn new(input_data: Vec<f32>) -> Self {
        Self {
            input_data,
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}

/// The result of a successful inference call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Model output vector
    pub prediction: Vec<f32>,

    /// Model version that produced the prediction
    pub model_version: String,
}

fn default_model_version() -> String {
    DEFAULT_MODEL_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_version_defaults_on_deserialize() {
        let request: InferenceRequest =
            serde_json::from_str(r#"{"input_data": [1.0, 2.0]}"#).unwrap();
        assert_eq!(request.model_version, DEFAULT_MODEL_VERSION);
        assert_eq!(request.input_data, vec![1.0, 2.0]);
    }

    #[test]
    fn test_explicit_model_version_is_kept() {
        let request: InferenceRequest =
            serde_json::from_str(r#"{"input_data": [], "model_version": "v2"}"#).unwrap();
        assert_eq!(request.model_version, "v2");
    }
}
