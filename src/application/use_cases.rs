//! Use cases - Application mapping operations
//!
//! Use cases own the concerns the pure mapping code stays out of: payload
//! limits, JSON decoding and logging.

use crate::{
    config::AppConfig,
    domain::{duration::Duration, restriction::AccountRestrictionsInfo},
    infrastructure::{converters::DtoMapping, models::AccountRestrictionsInfoDto},
    shared::{
        error::{AppError, AppResult},
        logging::LoggingUtils,
    },
};
use std::time::Instant;

// Saturates instead of truncating the u128 microsecond count.
fn elapsed_micros(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Use case for mapping an account restrictions info payload
pub struct MapAccountRestrictionsUseCase {
    max_payload_bytes: usize,
}

impl MapAccountRestrictionsUseCase {
    /// Create a new use case with an explicit payload limit
    pub fn new(max_payload_bytes: usize) -> Self {
        Self { max_payload_bytes }
    }

    /// Create a use case from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.input.max_payload_bytes)
    }

    /// Decode and map a raw JSON payload
    pub fn execute(&self, payload: &[u8]) -> AppResult<AccountRestrictionsInfo> {
        let mapping_id = LoggingUtils::generate_mapping_id();
        let start = Instant::now();
        LoggingUtils::log_mapping_start(&mapping_id, "account_restrictions", payload.len());

        let result = self.map_payload(payload);
        let elapsed = elapsed_micros(start);

        match &result {
            Ok(info) => LoggingUtils::log_success(&mapping_id, "account_restrictions", info.value_count(), elapsed),
            Err(e) => LoggingUtils::log_error(&mapping_id, "account_restrictions", e, elapsed),
        }

        result
    }

    /// Map an already deserialized DTO
    pub fn execute_dto(&self, dto: &AccountRestrictionsInfoDto) -> AppResult<AccountRestrictionsInfo> {
        DtoMapping::extract_account_restriction_from_dto(dto)
    }

    fn map_payload(&self, payload: &[u8]) -> AppResult<AccountRestrictionsInfo> {
        if payload.len() > self.max_payload_bytes {
            return Err(AppError::PayloadTooLarge {
                size: payload.len(),
                limit: self.max_payload_bytes,
            });
        }

        let dto: AccountRestrictionsInfoDto = serde_json::from_slice(payload)?;
        self.execute_dto(&dto)
    }
}

/// Use case for parsing a server duration token
pub struct ParseDurationUseCase;

impl ParseDurationUseCase {
    /// Parse the token, logging the outcome
    pub fn execute(&self, token: &str) -> AppResult<Duration> {
        let mapping_id = LoggingUtils::generate_mapping_id();
        let start = Instant::now();
        LoggingUtils::log_mapping_start(&mapping_id, "server_duration", token.len());

        let result = DtoMapping::parse_server_duration(token);
        let elapsed = elapsed_micros(start);

        match &result {
            Ok(_) => LoggingUtils::log_success(&mapping_id, "server_duration", 1, elapsed),
            Err(e) => LoggingUtils::log_error(&mapping_id, "server_duration", e, elapsed),
        }

        result
    }
}
