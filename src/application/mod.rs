//! Application layer - Mapping use cases
//!
//! This module wires configuration, logging and the infrastructure converters
//! into the operations exposed to the CLI.

pub mod use_cases;

pub use use_cases::{MapAccountRestrictionsUseCase, ParseDurationUseCase};
