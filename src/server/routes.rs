// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{gemini_handler, health_handler, metrics_handler};
use super::middleware::{make_request_span, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::gemini::GenerationClient;
use crate::metrics::RequestMetrics;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path of the relay route; also its metrics label.
pub const GEMINI_PATH: &str = "/gemini";

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<dyn GenerationClient>,
    pub metrics: RequestMetrics,
}

pub fn create_router(
    config: AppConfig,
    client: Arc<dyn GenerationClient>,
    metrics: RequestMetrics,
) -> Result<Router> {
    metrics.initialize_path(GEMINI_PATH);

    let state = AppState {
        config,
        client,
        metrics,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        // The relay handler enforces `server.max_body_bytes` itself so that
        // oversized bodies are still logged and counted
        .route(
            GEMINI_PATH,
            post(gemini_handler).layer(DefaultBodyLimit::disable()),
        )
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
