//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, database path, and the
//! generation provider section.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    pub bind_port: u16,

    /// SQLite database path (e.g., "data/posts.db")
    pub database_path: String,

    /// Generation provider settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Generation provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key; falls back to the GEMINI_API_KEY environment variable
    /// when absent
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name (default: "gemini-pro")
    #[serde(default = "default_model")]
    pub model: String,

    /// Delay before the single in-provider retry, in milliseconds
    /// (default: 2000)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

/// Default retry delay: 2 seconds
fn default_retry_delay_ms() -> u64 {
    2000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: default_model(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        // Validate required fields
        if config.database_path.is_empty() {
            return Err(ConfigError::MissingField("database_path".to_string()));
        }

        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 3000,
            database_path: ":memory:".to_string(),
            gemini: GeminiConfig {
                api_key: Some("test-api-key".to_string()),
                model: default_model(),
                retry_delay_ms: 10,
            },
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
