//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, error, info};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::shared::error::AppError;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format ("text" or "json")
    pub fn initialize(level: &str, format: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if format == "json" {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log the start of a mapping operation
    pub fn log_mapping_start(mapping_id: &str, subject: &str, payload_bytes: usize) {
        debug!(
            mapping_id = %mapping_id,
            subject = %subject,
            payload_bytes = %payload_bytes,
            "Mapping wire object"
        );
    }

    /// Log a successful mapping
    pub fn log_success(mapping_id: &str, subject: &str, items: usize, duration_us: u64) {
        info!(
            mapping_id = %mapping_id,
            subject = %subject,
            items = %items,
            duration_us = %duration_us,
            "Mapping completed successfully"
        );
    }

    /// Log a failed mapping
    pub fn log_error(mapping_id: &str, subject: &str, error: &AppError, duration_us: u64) {
        error!(
            mapping_id = %mapping_id,
            subject = %subject,
            kind = %error.kind(),
            error = %error,
            duration_us = %duration_us,
            "Mapping failed"
        );
    }

    /// Generate a unique mapping ID
    pub fn generate_mapping_id() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        format!("map_{:x}", now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_mapping_id_prefix() {
        let id = LoggingUtils::generate_mapping_id();
        assert!(id.starts_with("map_"));
        assert!(id.len() > 4);
    }
}
