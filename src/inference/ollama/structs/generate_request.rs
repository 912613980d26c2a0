use serde::{Deserialize, Serialize};

use crate::errors::{validation, Result};

/// Request payload for Ollama's `/api/generate` endpoint.
///
/// Example:
/// ```ignore
/// GenerateRequest {
///     model: String::from("llama3.2"),
///     prompt: String::from("Explain how black holes work in simple terms."),
///     stream: false
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    /// Builds a non-streaming request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_model(&self.model)?;
        validation::validate_prompt(&self.prompt)
    }
}
