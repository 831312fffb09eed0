//! Axum-based HTTP server for gemini-gateway.
//!
//! # Components
//!
//! - `handlers`: the prompt relay, metrics and health endpoints.
//! - `middleware`: request id propagation and request spans.
//! - `routes`: the router that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::HealthResponse;
pub use routes::{create_router, AppState, GEMINI_PATH};
