// Shared helpers for router-level tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gemini_gateway::config::AppConfig;
use gemini_gateway::error::{GatewayError, Result};
use gemini_gateway::gemini::GenerationClient;
use gemini_gateway::metrics::RequestMetrics;
use gemini_gateway::server::create_router;
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

/// Returns a fixed answer and counts how often it was asked.
#[derive(Default)]
pub struct FixedClient {
    pub answer: String,
    pub calls: AtomicUsize,
}

impl FixedClient {
    pub fn new(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for FixedClient {
    async fn generate(&self, _prompt: &str, _cancel: CancellationToken) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

/// Always fails with an upstream error.
pub struct FailingClient {
    pub message: String,
}

#[async_trait]
impl GenerationClient for FailingClient {
    async fn generate(&self, _prompt: &str, _cancel: CancellationToken) -> Result<String> {
        Err(GatewayError::GeminiApi(self.message.clone()))
    }
}

pub fn router_with(client: Arc<dyn GenerationClient>) -> (Router, RequestMetrics) {
    router_with_config(AppConfig::default(), client)
}

pub fn router_with_config(
    config: AppConfig,
    client: Arc<dyn GenerationClient>,
) -> (Router, RequestMetrics) {
    let metrics = RequestMetrics::new().expect("metrics registry");
    let router = create_router(config, client, metrics.clone()).expect("router");
    (router, metrics)
}

pub fn post_gemini(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/gemini")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
