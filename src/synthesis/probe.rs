use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::SynthesisConfig;
use crate::errors::{ProbeError, Result};
use crate::synthesis::headtts::{headtts::HeadTts, structs::synthesize_request::SynthesizeRequest};

/// What a successful synthesis run wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisReport {
    pub path: PathBuf,
    pub bytes: usize,
}

impl std::fmt::Display for SynthesisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wrote {} ({} bytes)", self.path.display(), self.bytes)
    }
}

/// Sends one synthesis request and saves the audio to a fixed path.
#[derive(Debug, Clone)]
pub struct SynthesisProbe {
    client: HeadTts,
    request: SynthesizeRequest,
    output_path: PathBuf,
    preflight: bool,
}

impl SynthesisProbe {
    pub fn new(config: &SynthesisConfig) -> Result<Self> {
        Ok(Self {
            client: HeadTts::new(config.base_url.clone(), config.timeout())?,
            request: SynthesizeRequest::from(config),
            output_path: PathBuf::from(&config.output_path),
            preflight: config.preflight,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Console line for a failed run: `Failed: <status> <body>` for a
    /// rejected request, otherwise the error with its causes.
    pub fn failure_message(err: ProbeError) -> String {
        match err {
            ProbeError::UnexpectedStatus { status, body } => {
                format!("Failed: {} {}", status, body)
            }
            other => format!("Failed: {}", other.detail()),
        }
    }

    /// Runs the probe. The output file is only touched once the server has
    /// answered with status 200, and is overwritten rather than appended to.
    #[tracing::instrument(skip(self), fields(output = %self.output_path.display()))]
    pub async fn run(&self) -> Result<SynthesisReport> {
        if self.preflight && !self.client.is_server_running().await {
            warn!(base_url = %self.client.base_url, "Synthesis server did not answer the voices check");
        }

        let audio = self.client.synthesize(&self.request).await?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.output_path, &audio).await?;

        info!(bytes = audio.len(), "Audio saved");

        Ok(SynthesisReport {
            path: self.output_path.clone(),
            bytes: audio.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer, output: &Path) -> SynthesisConfig {
        SynthesisConfig {
            base_url: server.uri(),
            output_path: output.to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    async fn mock_synthesize(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/v1/synthesize"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_writes_exact_payload() {
        let server = MockServer::start().await;
        let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        mock_synthesize(&server, ResponseTemplate::new(200).set_body_bytes(payload.clone())).await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("temporary_files").join("test").join("hello.wav");
        let probe = SynthesisProbe::new(&config(&server, &output)).unwrap();

        let report = probe.run().await.unwrap();
        assert_eq!(report.bytes, 4096);
        assert_eq!(report.path, output);
        assert_eq!(std::fs::read(&output).unwrap(), payload);
        assert_eq!(
            report.to_string(),
            format!("Wrote {} (4096 bytes)", output.display())
        );
    }

    #[tokio::test]
    async fn test_server_error_does_not_create_file() {
        let server = MockServer::start().await;
        mock_synthesize(&server, ResponseTemplate::new(500).set_body_string("server error")).await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out").join("hello.wav");
        let probe = SynthesisProbe::new(&config(&server, &output)).unwrap();

        let err = probe.run().await.unwrap_err();
        match err {
            ProbeError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("Expected UnexpectedStatus, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_failure_message_for_status() {
        let message = SynthesisProbe::failure_message(ProbeError::unexpected_status(
            500,
            "server error",
        ));
        assert_eq!(message, "Failed: 500 server error");
    }

    #[tokio::test]
    async fn test_failure_message_for_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = SynthesisConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            output_path: dir.path().join("hello.wav").to_string_lossy().into_owned(),
            ..Default::default()
        };

        let err = SynthesisProbe::new(&config).unwrap().run().await.unwrap_err();
        let message = SynthesisProbe::failure_message(err);

        assert!(message.starts_with("Failed: HTTP request error: error sending request"));
        assert!(message.to_lowercase().contains("connect"));
    }

    #[tokio::test]
    async fn test_second_run_overwrites() {
        let server = MockServer::start().await;
        mock_synthesize(&server, ResponseTemplate::new(200).set_body_bytes(b"RIFF-audio".to_vec()))
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("hello.wav");
        std::fs::write(&output, b"stale content that is longer than the payload").unwrap();

        let probe = SynthesisProbe::new(&config(&server, &output)).unwrap();
        probe.run().await.unwrap();
        let first = std::fs::read(&output).unwrap();
        probe.run().await.unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, b"RIFF-audio");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_preflight_failure_still_synthesizes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/voices"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;
        mock_synthesize(&server, ResponseTemplate::new(200).set_body_bytes(vec![0u8; 16])).await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("hello.wav");
        let synthesis_config = SynthesisConfig {
            preflight: true,
            ..config(&server, &output)
        };

        let report = SynthesisProbe::new(&synthesis_config)
            .unwrap()
            .run()
            .await
            .unwrap();
        assert_eq!(report.bytes, 16);
    }

    #[tokio::test]
    async fn test_connection_refused_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("hello.wav");
        let config = SynthesisConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            output_path: output.to_string_lossy().into_owned(),
            ..Default::default()
        };

        let err = SynthesisProbe::new(&config).unwrap().run().await.unwrap_err();
        assert!(matches!(err, ProbeError::Http(_)));
        assert!(!output.exists());
    }
}
