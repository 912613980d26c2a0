/// Error types shared by both probes
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ProbeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Message including every cause in the source chain. Causes whose text
    /// is already part of the message are skipped.
    pub fn detail(self) -> String {
        let error = anyhow::Error::from(self);
        let mut detail = String::new();
        for cause in error.chain() {
            let text = cause.to_string();
            if detail.contains(&text) {
                continue;
            }
            if !detail.is_empty() {
                detail.push_str(": ");
            }
            detail.push_str(&text);
        }
        detail
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Input validation functions
pub mod validation {
    use super::*;

    /// Validate the text sent to the synthesis server
    pub fn validate_synthesis_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ProbeError::invalid_input("Synthesis text cannot be empty"));
        }

        Ok(())
    }

    /// Speed must be a positive, finite multiplier
    pub fn validate_speed(speed: f32) -> Result<()> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ProbeError::invalid_input(format!(
                "Speed must be a positive number, got {}",
                speed
            )));
        }

        Ok(())
    }

    pub fn validate_prompt(prompt: &str) -> Result<()> {
        if prompt.trim().is_empty() {
            return Err(ProbeError::invalid_input("Prompt cannot be empty"));
        }

        Ok(())
    }

    pub fn validate_model(model: &str) -> Result<()> {
        if model.trim().is_empty() {
            return Err(ProbeError::invalid_input("Model name cannot be empty"));
        }

        Ok(())
    }
}

/// Constants used throughout the application
pub mod constants {
    // Configuration constants
    pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
    pub const DEFAULT_LOG_LEVEL: &str = "info";

    // Synthesis server (HeadTTS)
    pub const DEFAULT_SYNTHESIS_BASE_URL: &str = "http://127.0.0.1:8882";
    pub const SYNTHESIZE_PATH: &str = "/v1/synthesize";
    pub const VOICES_PATH: &str = "/v1/voices";
    pub const DEFAULT_SYNTHESIS_TEXT: &str = "Hello world";
    pub const DEFAULT_VOICE: &str = "am_fenrir";
    pub const DEFAULT_LANGUAGE: &str = "en-us";
    pub const DEFAULT_SPEED: f32 = 1.0;
    pub const DEFAULT_OUTPUT_PATH: &str = "temporary_files/test/hello.wav";

    // Inference server (Ollama)
    pub const DEFAULT_INFERENCE_BASE_URL: &str = "http://localhost:11434";
    pub const GENERATE_PATH: &str = "/api/generate";
    pub const DEFAULT_MODEL: &str = "llama3.2";
    pub const DEFAULT_PROMPT: &str = "Explain how black holes work in simple terms.";
    pub const NO_RESPONSE_PLACEHOLDER: &str = "[No response]";
}
