use config::{builder::DefaultState, Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SmokeError;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const ENV_PREFIX: &str = "GEO_SMOKE";
pub const CONFIG_FILE_NAME: &str = "geo-smoke.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// Used only when ANTHROPIC_API_KEY is not set
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AnthropicConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub anthropic: AnthropicConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load defaults, then config files, then `GEO_SMOKE_*` environment overrides.
    ///
    /// `extra` is layered after the standard files when given and must exist.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = Self::defaults()?;

        // ./geo-smoke.toml
        if let Ok(current_dir) = std::env::current_dir() {
            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                settings = settings.add_source(File::from(config_path));
            }
        }

        // <platform config dir>/geo/smoke.toml
        if let Some(config_path) = user_config_path() {
            settings = settings.add_source(File::from(config_path).required(false));
        }

        if let Some(path) = extra {
            settings = settings.add_source(File::from(path.to_path_buf()));
        }

        // GEO_SMOKE_LOGGING__LEVEL=debug, GEO_SMOKE_ANTHROPIC__BASE_URL=...
        settings = settings.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        settings.build()?.try_deserialize()
    }

    /// Defaults plus a single file, ignoring the environment
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        ConfigBuilder::builder()
            .set_default("anthropic.base_url", geo_llm_sdk::claude::client::DEFAULT_BASE_URL)?
            .set_default(
                "anthropic.timeout_secs",
                geo_llm_sdk::claude::client::DEFAULT_TIMEOUT.as_secs() as i64,
            )?
            .set_default("logging.level", "info")
    }

    /// API key from `ANTHROPIC_API_KEY`, falling back to `anthropic.api_key`
    pub fn api_key(&self) -> Result<String, SmokeError> {
        resolve_api_key(
            std::env::var(API_KEY_ENV).ok(),
            self.anthropic.api_key.as_deref(),
        )
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("geo").join("smoke.toml"))
}

/// Empty values count as unset. There is no built-in fallback key.
pub fn resolve_api_key(
    env_value: Option<String>,
    file_value: Option<&str>,
) -> Result<String, SmokeError> {
    env_value
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            file_value
                .filter(|key| !key.trim().is_empty())
                .map(str::to_string)
        })
        .ok_or(SmokeError::MissingApiKey)
}

/// Short, log-safe form of an API key
pub fn mask_api_key(key: &str) -> String {
    let prefix: String = key.chars().take(10).collect();
    if prefix.len() < key.len() {
        format!("{prefix}...")
    } else {
        "***".to_string()
    }
}
