//! Configuration for the content engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the [`crate::ContentEngine`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum time for one generation call, including the provider's
    /// internal retry (seconds)
    pub generation_timeout_secs: u64,

    /// Upper bound on ideas returned from one call, whatever the model
    /// produced
    pub max_idea_count: usize,
}

impl EngineConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        if self.max_idea_count == 0 {
            return Err("max_idea_count must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            generation_timeout_secs: 120,
            max_idea_count: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = EngineConfig {
            generation_timeout_secs: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.generation_timeout_secs, parsed.generation_timeout_secs);
        assert_eq!(config.max_idea_count, parsed.max_idea_count);
    }
}
