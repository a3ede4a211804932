//! Configuration for API keys, HTTP timeouts, and the word-vector model.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Complete toolkit configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API keys for external services.
    #[serde(default)]
    pub api_keys: ApiKeys,
    /// HTTP timeout settings for external calls.
    #[serde(default)]
    pub http: HttpConfig,
    /// Word-vector model settings.
    #[serde(default)]
    pub vectors: VectorConfig,
}

/// API keys for external services.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeys {
    /// `SerpApi` key for SERP data fetches.
    pub serpapi_api_key: Option<String>,
    /// `OpenAI` key for chat-based keyword expansion.
    pub openai_api_key: Option<String>,
}

/// HTTP timeout settings for external calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout in seconds for SERP data requests.
    pub serp_timeout_seconds: u64,
    /// Timeout in seconds for knowledge-graph lookups.
    pub knowledge_graph_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            serp_timeout_seconds: 10,
            knowledge_graph_timeout_seconds: 5,
        }
    }
}

/// Word-vector model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Path to a GloVe-format text file; vector expansion is disabled when unset.
    pub model_path: Option<PathBuf>,
    /// How many similar terms to request per keyword.
    pub similar_terms: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            similar_terms: 5,
        }
    }
}

impl Config {
    /// Get the cornerstone config directory (`~/.cornerstone`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".cornerstone"))
    }

    /// Get the default config file path (`~/.cornerstone/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location (`~/.cornerstone/config.toml`)
    /// If the config doesn't exist, creates it with default values
    ///
    /// # Errors
    /// Returns an error if the config cannot be read or created
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        tracing::debug!(
            "Loaded config from {:?}: serpapi_api_key={}, openai_api_key={}",
            path,
            if config.api_keys.serpapi_api_key.is_some() {
                "present"
            } else {
                "missing"
            },
            if config.api_keys.openai_api_key.is_some() {
                "present"
            } else {
                "missing"
            }
        );

        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|error| Error::Config(format!("Failed to serialize config: {error}")))?;

        let header = "# Cornerstone Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))?;

        Ok(())
    }

    /// Get API key for a provider, checking config first, then environment variables
    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        match provider {
            "serpapi" => self
                .api_keys
                .serpapi_api_key
                .clone()
                .or_else(|| env::var("SERPAPI_API_KEY").ok()),
            "openai" => self
                .api_keys
                .openai_api_key
                .clone()
                .or_else(|| env::var("OPENAI_API_KEY").ok()),
            _ => None,
        }
    }
}
