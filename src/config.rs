use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MemoirConfig {
    pub logging: LoggingConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub api_base: String,
    pub model: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never lives in the config file.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub dimensions: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Records returned per query.
    pub top_n: usize,
    /// Similarity candidates kept before blended scoring.
    pub candidate_k: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "openai".into(),
            api_base: "https://api.openai.com/v1".into(),
            model: "text-embedding-3-small".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            timeout_secs: 10,
            dimensions: 1536,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            candidate_k: 50,
        }
    }
}

/// Returns `~/.memoir/`
pub fn default_memoir_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".memoir")
}

/// Returns the default config file path: `~/.memoir/config.toml`
pub fn default_config_path() -> PathBuf {
    default_memoir_dir().join("config.toml")
}

impl MemoirConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MemoirConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (MEMOIR_LOG_LEVEL,
    /// MEMOIR_EMBED_API_BASE, MEMOIR_EMBED_MODEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MEMOIR_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("MEMOIR_EMBED_API_BASE") {
            self.embedding.api_base = val;
        }
        if let Ok(val) = std::env::var("MEMOIR_EMBED_MODEL") {
            self.embedding.model = val;
        }
    }
}
