use std::io::Write;

use tracing::{error, info};

use crate::config::InferenceConfig;
use crate::errors::Result;
use crate::inference::ollama::{ollama::Ollama, structs::generate_request::GenerateRequest};

/// Result of one inference query, as shown on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceOutcome {
    /// Generated text, or the placeholder when the server sent none.
    Answered(String),
    /// Detail of the request failure.
    Failed(String),
}

impl std::fmt::Display for InferenceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceOutcome::Answered(text) => write!(f, "Model response:\n{}", text),
            InferenceOutcome::Failed(detail) => write!(f, "Error querying Ollama: {}", detail),
        }
    }
}

/// Sends one prompt to the inference server and reports the answer.
#[derive(Debug, Clone)]
pub struct InferenceProbe {
    client: Ollama,
    model: String,
}

impl InferenceProbe {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        Ok(Self {
            client: Ollama::new(config.base_url.clone(), config.timeout())?,
            model: config.model.clone(),
        })
    }

    /// Query the model. Request failures are folded into
    /// [`InferenceOutcome::Failed`] and never returned as errors.
    #[tracing::instrument(skip(self))]
    pub async fn ask(&self, prompt: &str) -> InferenceOutcome {
        let request = GenerateRequest::new(self.model.clone(), prompt);

        match self.client.generate(&request).await {
            Ok(response) => {
                info!(model = %self.model, "Model answered");
                InferenceOutcome::Answered(response.text_or_placeholder())
            }
            Err(err) => {
                error!(error = %err, "Inference request failed");
                InferenceOutcome::Failed(err.detail())
            }
        }
    }

    /// Like [`InferenceProbe::ask`], also writing the outcome to `out`.
    pub async fn query<W: Write>(
        &self,
        prompt: &str,
        out: &mut W,
    ) -> std::io::Result<InferenceOutcome> {
        let outcome = self.ask(prompt).await;
        writeln!(out, "{}", outcome)?;
        Ok(outcome)
    }
}
