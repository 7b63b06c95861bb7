//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::AppError;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (overridden by `RUST_LOG` when set)
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format: "text" or "json"
    #[validate(length(min = 1))]
    pub format: String,
}

/// Input handling configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum accepted payload size in bytes
    #[validate(range(min = 1024, max = 16777216))] // 1KB to 16MB
    pub max_payload_bytes: usize,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Input handling configuration
    pub input: InputConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 1024 * 1024, // 1MB
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        Self::load_from("Conf")
    }

    /// Load configuration from the named file (optional) and environment variables
    pub fn load_from(file_name: &str) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(config::Environment::with_prefix("DTO_MAPPING").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config.try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;
        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.logging.validate()?;
        self.input.validate()?;

        Ok(())
    }
}
