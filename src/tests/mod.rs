//! Test suite for the mapping layer
//!
//! This module provides:
//! - Fixtures for wire payloads
//! - Integration tests driving the use cases end to end

pub mod fixtures;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // Initialize tracing for tests
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        config.input.max_payload_bytes = 4096;
        config
    }
}

/// Test result type
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
