use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::constants::NO_RESPONSE_PLACEHOLDER;

/// Body returned by `/api/generate` with `stream: false`. Only the generated
/// text is kept; the timing and context fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<Value>,
}

impl GenerateResponse {
    /// The generated text, or the placeholder when the field is missing or null.
    /// Non-string values are rendered as JSON.
    pub fn text_or_placeholder(&self) -> String {
        match &self.response {
            None | Some(Value::Null) => NO_RESPONSE_PLACEHOLDER.to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}
