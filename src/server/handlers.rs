// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{GatewayError, Result};
use crate::models::relay::{PromptRequest, PromptResponse};
use axum::{
    body::{to_bytes, Body},
    extract::{ConnectInfo, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub client: String,
    pub model: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        client: state.config.gemini.client.as_str().to_string(),
        model: state.config.gemini.model.clone(),
    })
}

/// Handler for `POST /gemini`.
///
/// Every call ends in exactly one of 200, 400 or 500 and bumps
/// `http_requests_total` once for that outcome.
pub async fn gemini_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    body: Body,
) -> Response {
    let path = uri.path();
    let caller = connect_info
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!(method = %method, path = %path, ip = %caller, "Received a new request");

    let response = match relay_prompt(&state, body).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => e.into_response(),
    };

    state
        .metrics
        .record_request(path, response.status().as_u16());

    response
}

/// Read, decode, generate, wrap. Logs the completion point of each outcome.
async fn relay_prompt(state: &AppState, body: Body) -> Result<PromptResponse> {
    let body = to_bytes(body, state.config.server.max_body_bytes)
        .await
        .map_err(|e| {
            warn!(
                error = %e,
                limit = state.config.server.max_body_bytes,
                "Error reading request body"
            );
            GatewayError::InvalidRequest(format!("Failed to read request body: {}", e))
        })?;

    let request = PromptRequest::from_body(&body).map_err(|e| {
        warn!(error = %e, "Error decoding JSON");
        GatewayError::InvalidRequest(e.to_string())
    })?;

    // Fires if this future is dropped, i.e. the caller disconnected
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let text = state
        .client
        .generate(&request.prompt, cancel)
        .await
        .map_err(|e| {
            error!(error = %e, "Error calling Gemini API");
            e
        })?;

    if text.is_empty() {
        warn!(
            prompt_len = request.prompt.len(),
            "Gemini API returned an empty response"
        );
    } else {
        info!(
            prompt_len = request.prompt.len(),
            response_len = text.len(),
            "Request processed successfully"
        );
    }

    Ok(PromptResponse::from_generated(text))
}

/// Handler for `GET /metrics` (Prometheus text exposition).
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response> {
    let body = state.metrics.gather()?;
    Ok(([(header::CONTENT_TYPE, state.metrics.content_type())], body).into_response())
}
