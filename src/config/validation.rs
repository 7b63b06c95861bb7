//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{AppConfig, LoggingConfig};
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_logging_config(&config.logging)?;

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(AppError::Validation(
                format!("Invalid log level: {}", logging.level)
            ));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(
                format!("Invalid log format: {}", logging.format)
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, format: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: format.to_string(),
        }
    }

    #[test]
    fn test_validate_logging_config_valid() {
        assert!(ConfigValidator::validate_logging_config(&logging("debug", "json")).is_ok());
        assert!(ConfigValidator::validate_logging_config(&logging("WARN", "text")).is_ok());
    }

    #[test]
    fn test_validate_logging_config_invalid_level() {
        let result = ConfigValidator::validate_logging_config(&logging("verbose", "text"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validate_logging_config_invalid_format() {
        let result = ConfigValidator::validate_logging_config(&logging("info", "xml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_validate_config_complete() {
        let config = AppConfig::default();
        let result = ConfigValidator::validate_config(&config);
        assert!(result.is_ok());
    }
}
