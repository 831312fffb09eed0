//! Configuration data structures for gemini-gateway.
//!
//! This module defines the schema for the application settings: the bind host,
//! the upstream Gemini connection, how the API key is obtained, and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// Port the relay listens on. Not configurable.
pub const LISTEN_PORT: u16 = 8080;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable the deployment uses to announce where it runs.
pub const RUNNING_PLATFORM_ENV_VAR: &str = "RUNNING_PLATFORM";

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Where the API key comes from.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address the server binds to. The port is always [`LISTEN_PORT`].
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// Largest `/gemini` request body accepted, in bytes. Larger bodies are
    /// answered with 400 and counted like any other bad request.
    /// Default: 50 MiB
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Which generation client backs the `/gemini` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    /// Call the real Gemini API.
    #[default]
    Live,
    /// Echo the prompt back without any network access.
    Stub,
}

impl ClientMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientMode::Live => "live",
            ClientMode::Stub => "stub",
        }
    }
}

/// Settings for the upstream Gemini API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the public Generative Language API.
    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Model used for every request.
    /// Default: `gemini-2.5-pro`
    #[serde(default = "default_model")]
    pub model: String,

    /// Whole-request timeout for the outbound call, in seconds.
    /// Default: `120`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Live or stubbed generation.
    /// Default: `live`
    #[serde(default)]
    pub client: ClientMode,
}

/// Deployment platform, which decides how the API key is loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Key comes straight from the process environment.
    #[default]
    Cloud,
    /// Key comes from a `.env` file, which must exist.
    Local,
    /// Key is typed on standard input when the container starts.
    Docker,
}

impl Platform {
    /// Maps a `RUNNING_PLATFORM` value; anything unrecognised runs as `Cloud`.
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Platform::Local,
            "docker" => Platform::Docker,
            _ => Platform::Cloud,
        }
    }
}

/// Settings for API key resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Platform flag selecting the credential provider.
    /// Default: derived from `RUNNING_PLATFORM`, else `cloud`.
    #[serde(default = "default_platform")]
    pub platform: Platform,

    /// Variable read by the environment and dotenv providers.
    /// Default: `GEMINI_API_KEY`
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// File loaded by the dotenv provider.
    /// Default: `.env`
    #[serde(default = "default_dotenv_path")]
    pub dotenv_path: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`json`, `pretty`, `compact`).
    /// Default: `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout(),
            client: ClientMode::default(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            env_var: default_env_var(),
            dotenv_path: default_dotenv_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_max_body_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_platform() -> Platform {
    std::env::var(RUNNING_PLATFORM_ENV_VAR)
        .map(|v| Platform::from_env_value(&v))
        .unwrap_or_default()
}

fn default_env_var() -> String {
    API_KEY_ENV_VAR.to_string()
}

fn default_dotenv_path() -> String {
    ".env".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_env_value() {
        assert_eq!(Platform::from_env_value("local"), Platform::Local);
        assert_eq!(Platform::from_env_value("Docker\n"), Platform::Docker);
        assert_eq!(Platform::from_env_value("cloud"), Platform::Cloud);
        assert_eq!(Platform::from_env_value("k8s"), Platform::Cloud);
        assert_eq!(Platform::from_env_value(""), Platform::Cloud);
    }

    #[test]
    fn test_defaults() {
        let gemini = GeminiConfig::default();
        assert_eq!(gemini.model, "gemini-2.5-pro");
        assert_eq!(gemini.client, ClientMode::Live);
        assert_eq!(gemini.timeout_seconds, 120);
        assert_eq!(LoggingConfig::default().format, "json");
        assert_eq!(ServerConfig::default().host, "0.0.0.0");
        assert_eq!(ServerConfig::default().max_body_bytes, 50 * 1024 * 1024);
    }
}
