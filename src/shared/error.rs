//! Error handling module
//!
//! This module provides centralized error handling for the mapping layer.

use thiserror::Error;
use serde_json::Value;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unrecognized restriction flag: 0x{flags:04X}")]
    UnrecognizedRestrictionFlag { flags: u16 },

    #[error("Malformed duration token: {token:?}")]
    MalformedDurationToken { token: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid mosaic id: {0}")]
    InvalidMosaicId(String),

    #[error("Invalid restriction value at index {index}: {reason}")]
    InvalidRestrictionValue { index: usize, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Payload too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::UnrecognizedRestrictionFlag { .. } => "unrecognized_restriction_flag",
            AppError::MalformedDurationToken { .. } => "malformed_duration_token",
            AppError::InvalidAddress(_) => "invalid_address",
            AppError::InvalidMosaicId(_) => "invalid_mosaic_id",
            AppError::InvalidRestrictionValue { .. } => "invalid_restriction_value",
            AppError::Json(_) => "json",
            AppError::Config(_) => "config",
            AppError::Validation(_) => "validation",
            AppError::Io(_) => "io",
            AppError::PayloadTooLarge { .. } => "payload_too_large",
            AppError::Internal(_) => "internal",
        }
    }

    /// Whether the error was caused by the content of a wire object
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::UnrecognizedRestrictionFlag { .. }
                | AppError::MalformedDurationToken { .. }
                | AppError::InvalidAddress(_)
                | AppError::InvalidMosaicId(_)
                | AppError::InvalidRestrictionValue { .. }
                | AppError::Json(_)
                | AppError::PayloadTooLarge { .. }
        )
    }

    /// Convert to a JSON error body
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string()
            }
        })
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Configuration validation failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
