// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{GatewayError, Result};
use prometheus::{
    register_int_counter_vec_with_registry, Encoder, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Request counters backed by their own Prometheus registry.
///
/// Built once at startup and shared through the router state; each test can
/// build its own instance and observe only its own traffic.
#[derive(Clone)]
pub struct RequestMetrics {
    registry: Registry,

    /// Total HTTP requests, by path and status code
    http_requests_total: IntCounterVec,
}

impl RequestMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let http_requests_total = register_int_counter_vec_with_registry!(
            Opts::new("http_requests_total", "Total number of HTTP requests."),
            &["path", "status_code"],
            registry
        )?;

        Ok(Self {
            registry,
            http_requests_total,
        })
    }

    /// Create the zero-valued series for every status the relay can return, so
    /// the counter is exported before the first request arrives.
    pub fn initialize_path(&self, path: &str) {
        for status_code in ["200", "400", "500"] {
            self.http_requests_total.with_label_values(&[path, status_code]);
        }
    }

    /// Count one finished request.
    pub fn record_request(&self, path: &str, status_code: u16) {
        self.http_requests_total
            .with_label_values(&[path, &status_code.to_string()])
            .inc();
    }

    /// Current value of one counter series.
    pub fn request_count(&self, path: &str, status_code: u16) -> u64 {
        self.http_requests_total
            .with_label_values(&[path, &status_code.to_string()])
            .get()
    }

    /// Gather all metrics and return them in Prometheus text format
    pub fn gather(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| GatewayError::Internal(format!("Metrics output is not UTF-8: {}", e)))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}
