// Credential provider implementations
// Author: kelexine (https://github.com/kelexine)

use super::{ApiKey, CredentialProvider};
use crate::error::{GatewayError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads the key from a process environment variable.
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentials {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn load(&self) -> Result<ApiKey> {
        let value = std::env::var(&self.var).map_err(|_| {
            GatewayError::Credentials(format!("{} environment variable is not set", self.var))
        })?;
        ApiKey::new(value)
    }
}

/// Reads the key from a `.env` file. The file must exist; a variable already
/// present in the process environment wins over the file's value.
pub struct DotenvCredentials {
    path: PathBuf,
    var: String,
}

impl DotenvCredentials {
    pub fn new(path: impl Into<PathBuf>, var: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            var: var.into(),
        }
    }
}

impl CredentialProvider for DotenvCredentials {
    fn name(&self) -> &'static str {
        "dotenv"
    }

    fn load(&self) -> Result<ApiKey> {
        let entries = dotenvy::from_path_iter(&self.path).map_err(|e| {
            GatewayError::Credentials(format!(
                "Error loading {} file: {}",
                self.path.display(),
                e
            ))
        })?;

        if let Ok(value) = std::env::var(&self.var) {
            debug!("{} already set in environment, ignoring {}", self.var, self.path.display());
            return ApiKey::new(value);
        }

        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                GatewayError::Credentials(format!("Malformed {}: {}", self.path.display(), e))
            })?;
            if key == self.var {
                return ApiKey::new(value);
            }
        }

        Err(GatewayError::Credentials(format!(
            "{} not found in {}",
            self.var,
            self.path.display()
        )))
    }
}

/// Reads the key as one line from an interactive reader, normally stdin.
pub struct InteractiveCredentials {
    reader: std::sync::Mutex<Box<dyn BufRead + Send>>,
}

impl InteractiveCredentials {
    pub fn stdin() -> Self {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }

    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            reader: std::sync::Mutex::new(Box::new(reader)),
        }
    }
}

impl CredentialProvider for InteractiveCredentials {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn load(&self) -> Result<ApiKey> {
        info!("Waiting for the Gemini API key on standard input");
        eprint!("Enter Gemini API key: ");
        std::io::stderr().flush()?;

        let mut reader = self
            .reader
            .lock()
            .map_err(|_| GatewayError::Internal("stdin reader lock poisoned".to_string()))?;

        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            return Err(GatewayError::Credentials(
                "standard input closed before an API key was entered".to_string(),
            ));
        }

        ApiKey::new(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_env_provider_reads_variable() {
        std::env::set_var("RELAY_TEST_ENV_KEY", "env-secret");
        let key = EnvCredentials::new("RELAY_TEST_ENV_KEY").load().unwrap();
        assert_eq!(key.expose(), "env-secret");
    }

    #[test]
    fn test_env_provider_fails_when_unset() {
        let err = EnvCredentials::new("RELAY_TEST_UNSET_KEY")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("RELAY_TEST_UNSET_KEY"));
    }

    #[test]
    fn test_dotenv_provider_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OTHER=1\nRELAY_TEST_DOTENV_KEY=file-secret\n").unwrap();

        let key = DotenvCredentials::new(&path, "RELAY_TEST_DOTENV_KEY")
            .load()
            .unwrap();
        assert_eq!(key.expose(), "file-secret");
    }

    #[test]
    fn test_dotenv_provider_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DotenvCredentials::new(dir.path().join("missing.env"), "ANY")
            .load()
            .unwrap_err();
        assert!(matches!(err, GatewayError::Credentials(_)));
    }

    #[test]
    fn test_dotenv_provider_missing_variable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "SOMETHING_ELSE=1\n").unwrap();

        let err = DotenvCredentials::new(&path, "RELAY_TEST_ABSENT_KEY")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_interactive_provider_strips_newline() {
        let provider = InteractiveCredentials::from_reader(Cursor::new("typed-secret\n"));
        assert_eq!(provider.load().unwrap().expose(), "typed-secret");
    }

    #[test]
    fn test_interactive_provider_rejects_closed_input() {
        let provider = InteractiveCredentials::from_reader(Cursor::new(""));
        assert!(provider.load().is_err());
    }
}
