//! Structured logging and secret-masking utilities.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides a helper that keeps Gemini API keys out of log sinks and error
//! bodies.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json` (default): Structured JSON logs for production ingestion.
/// - `pretty`: Human-readable, multi-line output for development.
/// - `compact`: Single-line human-readable output.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    Ok(())
}

/// Masks Gemini API keys in free text.
///
/// Two shapes are recognised: bare Google API keys (`AIza` followed by the key
/// body) and `key=` query parameters as echoed back in upstream error messages.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    // Pattern 1: Google API keys, which start with "AIza"
    while let Some(start) = result.find("AIza") {
        let end = token_end(&result, start);
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    // Pattern 2: key=... query parameters
    let mut search_from = 0;
    while let Some(pos) = result[search_from..].find("key=") {
        let start = search_from + pos + "key=".len();
        let end = token_end(&result, start);
        if end > start {
            result.replace_range(start..end, "[REDACTED]");
            search_from = start + "[REDACTED]".len();
        } else {
            search_from = start;
        }
    }

    result
}

fn token_end(s: &str, start: usize) -> usize {
    s[start..]
        .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '&' | ',' | ')'))
        .map(|i| start + i)
        .unwrap_or(s.len())
}
