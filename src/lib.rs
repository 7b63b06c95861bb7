//! DTO mapping - Typed domain values from REST API wire objects
//!
//! This library converts account-restriction and server-duration wire objects
//! into strongly typed values. Restriction records are decoded according to
//! their flag bitmask and duration tokens such as `"30s"` are parsed strictly.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use domain::{
    AccountRestriction, AccountRestrictionsInfo, Address, Duration, DurationUnit, MosaicId,
    RestrictionFlag, RestrictionValue,
};
pub use infrastructure::DtoMapping;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
