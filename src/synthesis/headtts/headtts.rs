use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::errors::{constants::*, ProbeError, Result};
use crate::synthesis::headtts::structs::synthesize_request::SynthesizeRequest;

/// Client for the HeadTTS REST API.
#[derive(Clone, Debug)]
pub struct HeadTts {
    pub base_url: String,
    client: reqwest::Client,
}

impl HeadTts {
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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Synthesize text and return the raw audio bytes.
    ///
    /// Only status 200 counts as success; anything else is returned as
    /// [`ProbeError::UnexpectedStatus`] carrying the response text.
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn synthesize(&self, request: &SynthesizeRequest) -> Result<Bytes> {
        request.validate()?;

        let response = self
            .client
            .post(self.url(SYNTHESIZE_PATH))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = error_body(response.text().await);
            return Err(ProbeError::unexpected_status(status.as_u16(), body));
        }

        let audio = response.bytes().await?;
        info!(bytes = audio.len(), "Received audio payload");
        Ok(audio)
    }

    /// Returns true when `/v1/voices` answers with a success status.
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn is_server_running(&self) -> bool {
        match self.client.get(self.url(VOICES_PATH)).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "Voices endpoint unreachable");
                false
            }
        }
    }
}

/// Body text for an error response, or a note saying why it could not be read.
fn error_body(body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "Failed to read error response body");
            format!(
                "<failed to read response body: {}>",
                ProbeError::from(err).detail()
            )
        }
    }
}
