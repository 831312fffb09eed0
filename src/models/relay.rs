// Relay request/response bodies
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Deserializer, Serialize};

/// Returned in place of an empty generation.
pub const FALLBACK_RESPONSE: &str = "The model did not generate a response.";

/// Body of `POST /gemini`. A missing or `null` `prompt` decodes as the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
}

impl PromptRequest {
    /// Decodes the first JSON value of `body`; anything after it is ignored.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Self>();
        match values.next() {
            Some(request) => request,
            // Empty or whitespace-only body: surface serde_json's own EOF error
            None => serde_json::from_slice(body),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Successful body of `POST /gemini`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub response: String,
}

impl PromptResponse {
    /// Wraps generated text, substituting [`FALLBACK_RESPONSE`] for empty output.
    pub fn from_generated(text: String) -> Self {
        if text.is_empty() {
            Self {
                response: FALLBACK_RESPONSE.to_string(),
            }
        } else {
            Self { response: text }
        }
    }
}
