// Offline stand-in for the Gemini API
// Author: kelexine (https://github.com/kelexine)

use super::GenerationClient;
use crate::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Prepended to the prompt by [`StubClient`].
pub const STUB_RESPONSE_PREFIX: &str = "Simulated Gemini response to: ";

/// Echoes the prompt behind [`STUB_RESPONSE_PREFIX`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubClient;

#[async_trait]
impl GenerationClient for StubClient {
    async fn generate(&self, prompt: &str, _cancel: CancellationToken) -> Result<String> {
        debug!(prompt_len = prompt.len(), "Stub client echoing prompt");
        Ok(format!("{}{}", STUB_RESPONSE_PREFIX, prompt))
    }
}
