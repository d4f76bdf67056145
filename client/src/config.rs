//! Configuration for the dashboard client core
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Optional configuration file (config/client.toml)
//! 3. Environment variable overrides with WEATHER_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Prediction backend configuration
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the prediction backend
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from defaults, file, and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .set_default("api.base_url", "http://127.0.0.1:5000")?
            .set_default("api.timeout_seconds", 30)?
            .add_source(File::with_name("config/client").required(false))
            .add_source(
                Environment::with_prefix("WEATHER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                timeout_seconds: 30,
            },
        }
    }
}
