use std::time::Duration;

use tracing::debug;

use crate::errors::{constants::GENERATE_PATH, Result};
use crate::inference::ollama::structs::{
    generate_request::GenerateRequest, generate_response::GenerateResponse,
};

/// Client for a local Ollama server.
#[derive(Clone, Debug)]
pub struct Ollama {
    pub base_url: String,
    client: reqwest::Client,
}

impl Ollama {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Run a single non-streaming generation. Any non-2xx status is an error.
    #[tracing::instrument(skip(self, request), fields(base_url = %self.base_url, model = %request.model))]
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        request.validate()?;

        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!(len = body.len(), "Received generate response");

        Ok(serde_json::from_str::<GenerateResponse>(&body)?)
    }
}
