//! Configuration management for the native auth bridge
//!
//! Bridge settings are loaded once from config.toml with environment
//! overrides; embedders that configure the bridge programmatically can
//! start from `BridgeConfig::default()`.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Bridge configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BridgeConfig {
    /// Backend service identity the login attempts run under
    pub service_name: String,

    /// Maximum accepted username length
    pub max_username_length: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            service_name: "login".to_string(),
            max_username_length: 64,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("NATIVE_AUTH").separator("_"))
            .build()?;

        let config: BridgeConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.service_name.is_empty() {
            return Err(config::ConfigError::Message(
                "service_name cannot be empty".into(),
            ));
        }

        if self.max_username_length == 0 {
            return Err(config::ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
