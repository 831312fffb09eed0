//! Generation clients.
//!
//! The relay handler talks to a [`GenerationClient`] trait object and never
//! knows whether it is backed by the real Gemini API ([`GeminiClient`]) or by
//! the offline [`StubClient`]. Which one is wired in is a configuration choice.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;
mod stub;

pub use client::GeminiClient;
pub use stub::{StubClient, STUB_RESPONSE_PREFIX};

use crate::config::{ClientMode, CredentialsConfig, GeminiConfig};
use crate::credentials;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Produces text for a prompt.
///
/// An `Ok` with an empty string is a valid outcome, not an error. The token is
/// cancelled when the caller goes away; implementations doing I/O must stop
/// waiting when it fires.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str, cancel: CancellationToken) -> Result<String>;
}

/// Build the client selected by `gemini.client`.
///
/// Only the live client needs an API key, so the credential provider is not
/// consulted in stub mode.
pub fn from_config(
    gemini: &GeminiConfig,
    credentials_config: &CredentialsConfig,
) -> Result<Arc<dyn GenerationClient>> {
    match gemini.client {
        ClientMode::Stub => {
            info!("Using stub generation client, no Gemini API calls will be made");
            Ok(Arc::new(StubClient))
        }
        ClientMode::Live => {
            let provider = credentials::provider_for(credentials_config);
            info!(provider = provider.name(), "Loading Gemini API key");
            let api_key = provider.load()?;
            let client = GeminiClient::new(gemini, api_key)?;
            info!(model = %gemini.model, "Gemini client initialized successfully");
            Ok(Arc::new(client))
        }
    }
}
