use serde::{Deserialize, Serialize};

/// Output encoding accepted by the synthesis server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioEncoding {
    #[default]
    Wav,
    Pcm,
}
