//! Gemini API key resolution.
//!
//! The server core only ever sees an [`ApiKey`]. How that key was obtained is
//! decided once at startup by the platform flag, which picks one of the
//! [`CredentialProvider`] implementations below.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod providers;

pub use providers::{DotenvCredentials, EnvCredentials, InteractiveCredentials};

use crate::config::{CredentialsConfig, Platform};
use crate::error::{GatewayError, Result};
use zeroize::Zeroize;

/// A Gemini API key. Wiped from memory on drop and never printed.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Rejects blank keys so a missing credential fails at startup.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GatewayError::Credentials(
                "API key is empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// Source of the API key.
pub trait CredentialProvider: Send + Sync {
    /// Short name used in startup logs.
    fn name(&self) -> &'static str;

    /// Produce the key or fail; called exactly once before the server starts.
    fn load(&self) -> Result<ApiKey>;
}

/// Select the provider for the configured platform.
pub fn provider_for(config: &CredentialsConfig) -> Box<dyn CredentialProvider> {
    match config.platform {
        Platform::Cloud => Box::new(EnvCredentials::new(&config.env_var)),
        Platform::Local => Box::new(DotenvCredentials::new(&config.dotenv_path, &config.env_var)),
        Platform::Docker => Box::new(InteractiveCredentials::stdin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_impl_masks_key() {
        let key = ApiKey::new("AIzaSySecretValue").unwrap();
        let debug_str = format!("{:?}", key);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("AIzaSy"));
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("  \n").is_err());
        assert_eq!(ApiKey::new(" abc \n").unwrap().expose(), "abc");
    }

    #[test]
    fn test_provider_selection_follows_platform() {
        let mut config = CredentialsConfig::default();

        config.platform = Platform::Cloud;
        assert_eq!(provider_for(&config).name(), "environment");

        config.platform = Platform::Local;
        assert_eq!(provider_for(&config).name(), "dotenv");

        config.platform = Platform::Docker;
        assert_eq!(provider_for(&config).name(), "interactive");
    }
}
