// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use super::GenerationClient;
use crate::config::GeminiConfig;
use crate::credentials::ApiKey;
use crate::error::{GatewayError, Result};
use crate::models::gemini::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Client for the public Gemini Generative Language API.
///
/// Sends each prompt as a single user turn to `models/{model}:generateContent`
/// and returns the answer text. One attempt per call, no retries.
pub struct GeminiClient {
    http_client: Client,
    api_key: ApiKey,
    api_base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, api_key: ApiKey) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            timeout_seconds = config.timeout_seconds,
            "Created HTTP client for Gemini API"
        );

        Ok(Self {
            http_client,
            api_key,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base_url, self.model)
    }

    /// Call `generateContent` and extract the answer text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        info!(model = %self.model, prompt_len = prompt.len(), "Sending request to Gemini API");
        debug!(prompt = %prompt, "Gemini prompt");

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| GatewayError::GeminiApi(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::GeminiApi(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            let message = sanitize(&message);
            error!(status = status.as_u16(), error = %message, "Error from Gemini API");
            return Err(GatewayError::GeminiApi(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                GatewayError::GeminiApi(format!("Response parsing error: {}", e))
            })?;

        if let Some(reason) = gemini_response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!(block_reason = reason, "Gemini blocked the prompt");
        }

        let text = gemini_response.text();
        debug!(response_len = text.len(), "Received response from Gemini API");
        Ok(text)
    }

    /// Extract error message from a Google API error envelope
    fn extract_error_message(response_text: &str) -> Option<String> {
        let error = serde_json::from_str::<ErrorResponse>(response_text)
            .ok()?
            .error?;
        error.message.or(error.status)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str, cancel: CancellationToken) -> Result<String> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Caller went away, abandoning Gemini API call");
                Err(GatewayError::Cancelled)
            }
            result = self.generate_content(prompt) => result,
        }
    }
}
