//! Bot configuration.
//!
//! Secrets are read once at startup. Priority: `~/.config/clinic-bot/secret.json`,
//! then environment variables. A missing transport token or completion
//! credential is fatal; there is no degraded mode.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clinic_core::error::{ClinicError, Result};
use clinic_gateway::ApiGeneration;
use serde::Deserialize;

const DEFAULT_MODEL: &str = "gpt-4o";

/// Runtime configuration for the bot process.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Telegram bot token.
    pub telegram_token: String,
    /// Completion service credential.
    pub openai_api_key: String,
    /// Completion model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Which provider API generation to target.
    #[serde(default)]
    pub api_generation: ApiGeneration,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl BotConfig {
    /// Loads configuration from the secret file, falling back to
    /// environment variables (`TELEGRAM_BOT_TOKEN`, `OPENAI_API_KEY`,
    /// optional `OPENAI_MODEL_NAME`).
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::secret_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }
        Self::from_env()
    }

    /// Reads and parses a secret.json file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            ClinicError::config(format!(
                "failed to read secret file at {}: {err}",
                path.display()
            ))
        })?;
        serde_json::from_str(&content).map_err(|err| {
            ClinicError::config(format!(
                "failed to parse secret file at {}: {err}",
                path.display()
            ))
        })
    }

    fn from_env() -> Result<Self> {
        let telegram_token = env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            ClinicError::config(
                "TELEGRAM_BOT_TOKEN not found in secret file or environment variables",
            )
        })?;
        let openai_api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            ClinicError::config("OPENAI_API_KEY not found in secret file or environment variables")
        })?;
        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| default_model());

        Ok(Self {
            telegram_token,
            openai_api_key,
            model,
            api_generation: ApiGeneration::default(),
        })
    }

    /// Returns the path to the secret file: ~/.config/clinic-bot/secret.json
    fn secret_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".config").join("clinic-bot").join("secret.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_secret_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(
            &path,
            r#"{
                "telegram_token": "123:abc",
                "openai_api_key": "sk-test",
                "api_generation": "legacy"
            }"#,
        )
        .unwrap();

        let config = BotConfig::load_from_path(&path).unwrap();
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_generation, ApiGeneration::Legacy);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(&path, r#"{"telegram_token": "123:abc"}"#).unwrap();

        let err = BotConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
