//! Infrastructure layer - Wire models and converters
//!
//! This module contains the serde models of the REST API payloads and the
//! converters that turn them into domain values.

pub mod converters;
pub mod models;

pub use converters::DtoMapping;
pub use models::{AccountRestrictionDto, AccountRestrictionsDto, AccountRestrictionsInfoDto};
