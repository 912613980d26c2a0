use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::errors::{constants::*, Result};
use crate::synthesis::headtts::structs::audio_encoding::AudioEncoding;

/// Probe configuration. Every field has a default, so a missing or partial
/// `config.toml` still yields the hard-coded probe behaviour.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub synthesis: SynthesisConfig,
    pub inference: InferenceConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SynthesisConfig {
    pub base_url: String,
    pub input: String,
    pub voice: String,
    pub language: String,
    pub speed: f32,
    pub audio_encoding: AudioEncoding,
    pub output_path: String,
    /// Check `/v1/voices` before synthesizing.
    pub preflight: bool,
    pub timeout_seconds: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InferenceConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            synthesis: SynthesisConfig::default(),
            inference: InferenceConfig::default(),
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SYNTHESIS_BASE_URL.to_string(),
            input: DEFAULT_SYNTHESIS_TEXT.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            speed: DEFAULT_SPEED,
            audio_encoding: AudioEncoding::Wav,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            preflight: false,
            timeout_seconds: None,
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl SynthesisConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl InferenceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(source)?)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml(&source),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}
