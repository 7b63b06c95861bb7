//! Wire models returned by the REST API
//!
//! These mirror the JSON objects field for field. They are deserialized with
//! serde and handed to [`crate::infrastructure::converters::DtoMapping`].

use serde::{Deserialize, Serialize};

use crate::domain::restriction::RawRestrictionValue;

/// Account restrictions info wrapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRestrictionsInfoDto {
    /// Restrictions of one account
    pub account_restrictions: AccountRestrictionsDto,
}

/// Restrictions attached to one account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRestrictionsDto {
    /// State version
    #[serde(default = "default_state_version")]
    pub version: u32,

    /// Hex encoded account address
    pub address: String,

    /// Restriction records
    #[serde(default)]
    pub restrictions: Vec<AccountRestrictionDto>,
}

/// Single restriction record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRestrictionDto {
    /// Flag bitmask selecting the value type, direction and policy
    pub restriction_flags: u16,

    /// Values whose type depends on `restriction_flags`
    #[serde(default)]
    pub values: Vec<RawRestrictionValue>,
}

impl AccountRestrictionsInfoDto {
    /// Create a new wrapper for one account
    pub fn new(address: String, restrictions: Vec<AccountRestrictionDto>) -> Self {
        Self {
            account_restrictions: AccountRestrictionsDto {
                version: default_state_version(),
                address,
                restrictions,
            },
        }
    }
}

impl AccountRestrictionDto {
    /// Create a new restriction record
    pub fn new(restriction_flags: u16, values: Vec<RawRestrictionValue>) -> Self {
        Self { restriction_flags, values }
    }
}

fn default_state_version() -> u32 {
    1
}
