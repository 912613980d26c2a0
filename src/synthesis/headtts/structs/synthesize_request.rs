use serde::{Deserialize, Serialize};

use super::audio_encoding::AudioEncoding;
use crate::config::SynthesisConfig;
use crate::errors::{validation, Result};

/// Example:
/// ```ignore
/// SynthesizeRequest {
///     input: String::from("Hello world"),
///     voice: String::from("am_fenrir"),
///     language: String::from("en-us"),
///     speed: 1.0f32,
///     audioEncoding: AudioEncoding::Wav
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct SynthesizeRequest {
    pub input: String,
    pub voice: String,
    pub language: String,
    pub speed: f32,
    pub audioEncoding: AudioEncoding,
}

impl SynthesizeRequest {
    pub fn validate(&self) -> Result<()> {
        validation::validate_synthesis_text(&self.input)?;
        validation::validate_speed(self.speed)
    }
}

impl From<&SynthesisConfig> for SynthesizeRequest {
    fn from(config: &SynthesisConfig) -> Self {
        Self {
            input: config.input.clone(),
            voice: config.voice.clone(),
            language: config.language.clone(),
            speed: config.speed,
            audioEncoding: config.audio_encoding,
        }
    }
}
