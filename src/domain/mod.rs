//! Domain layer - Typed values produced by the mapping layer
//!
//! This module contains the value objects the wire DTOs are mapped into and
//! the two decoding rules that need more than a field copy: restriction flag
//! decoding and duration token parsing. Nothing here performs I/O or logging.

pub mod account;
pub mod duration;
pub mod mosaic;
pub mod restriction;

pub use account::{Address, NetworkType};
pub use duration::{Duration, DurationUnit};
pub use mosaic::MosaicId;
pub use restriction::{
    AccountRestriction, AccountRestrictionsInfo, Direction, Policy, RawRestrictionValue,
    RestrictionFlag, RestrictionValue, TargetType,
};
