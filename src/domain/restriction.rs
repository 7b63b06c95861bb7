//! Account restriction domain models and flag decoding
//!
//! A restriction record on the wire pairs a flag bitmask with a `values` array
//! whose element type is selected by the target-type bits of that flag. The
//! decoder resolves the array into [`RestrictionValue`]s once, so callers never
//! look at the raw scalars again.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::account::Address;
use crate::domain::mosaic::MosaicId;
use crate::shared::error::{AppError, AppResult};

/// Kind of value a restriction applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Address,
    MosaicId,
    OperationCode,
}

impl TargetType {
    /// Bit of the target-type field
    pub fn bit(&self) -> u16 {
        match self {
            TargetType::Address => RestrictionFlag::ADDRESS_BIT,
            TargetType::MosaicId => RestrictionFlag::MOSAIC_ID_BIT,
            TargetType::OperationCode => RestrictionFlag::OPERATION_CODE_BIT,
        }
    }
}

/// Direction of the restricted interaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Whether listed values are allowed or blocked
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    Allow,
    Block,
}

/// Restriction flag bitmask as received on the wire
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionFlag(u16);

impl RestrictionFlag {
    pub const ADDRESS_BIT: u16 = 0x0001;
    pub const MOSAIC_ID_BIT: u16 = 0x0002;
    pub const OPERATION_CODE_BIT: u16 = 0x0004;
    pub const OUTGOING_BIT: u16 = 0x4000;
    pub const BLOCK_BIT: u16 = 0x8000;

    /// All target-type bits
    pub const TARGET_TYPE_MASK: u16 =
        Self::ADDRESS_BIT | Self::MOSAIC_ID_BIT | Self::OPERATION_CODE_BIT;

    /// Every bit a wire flag may carry
    pub const KNOWN_BITS_MASK: u16 = Self::TARGET_TYPE_MASK | Self::OUTGOING_BIT | Self::BLOCK_BIT;

    pub const ALLOW_INCOMING_ADDRESS: Self = Self(0x0001);
    pub const ALLOW_INCOMING_MOSAIC_ID: Self = Self(0x0002);
    pub const ALLOW_INCOMING_OPERATION_CODE: Self = Self(0x0004);
    pub const ALLOW_OUTGOING_ADDRESS: Self = Self(0x4001);
    pub const ALLOW_OUTGOING_MOSAIC_ID: Self = Self(0x4002);
    pub const ALLOW_OUTGOING_OPERATION_CODE: Self = Self(0x4004);
    pub const BLOCK_INCOMING_ADDRESS: Self = Self(0x8001);
    pub const BLOCK_INCOMING_MOSAIC_ID: Self = Self(0x8002);
    pub const BLOCK_INCOMING_OPERATION_CODE: Self = Self(0x8004);
    pub const BLOCK_OUTGOING_ADDRESS: Self = Self(0xC001);
    pub const BLOCK_OUTGOING_MOSAIC_ID: Self = Self(0xC002);
    pub const BLOCK_OUTGOING_OPERATION_CODE: Self = Self(0xC004);

    /// Wrap a raw flag value
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Compose a flag from its three fields
    pub fn from_parts(target: TargetType, direction: Direction, policy: Policy) -> Self {
        let mut bits = target.bit();
        if direction == Direction::Outgoing {
            bits |= Self::OUTGOING_BIT;
        }
        if policy == Policy::Block {
            bits |= Self::BLOCK_BIT;
        }
        Self(bits)
    }

    /// Raw bitmask
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Target type selected by the flag.
    ///
    /// Fails unless exactly one target-type bit is set and no bit outside the
    /// three flag fields is set. Direction and policy bits take no part in
    /// this decision.
    pub fn target_type(&self) -> AppResult<TargetType> {
        if self.0 & !Self::KNOWN_BITS_MASK != 0 {
            return Err(AppError::UnrecognizedRestrictionFlag { flags: self.0 });
        }

        match self.0 & Self::TARGET_TYPE_MASK {
            Self::ADDRESS_BIT => Ok(TargetType::Address),
            Self::MOSAIC_ID_BIT => Ok(TargetType::MosaicId),
            Self::OPERATION_CODE_BIT => Ok(TargetType::OperationCode),
            _ => Err(AppError::UnrecognizedRestrictionFlag { flags: self.0 }),
        }
    }

    pub fn direction(&self) -> Direction {
        if self.0 & Self::OUTGOING_BIT != 0 {
            Direction::Outgoing
        } else {
            Direction::Incoming
        }
    }

    pub fn policy(&self) -> Policy {
        if self.0 & Self::BLOCK_BIT != 0 {
            Policy::Block
        } else {
            Policy::Allow
        }
    }
}

impl From<u16> for RestrictionFlag {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl fmt::Debug for RestrictionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestrictionFlag(0x{:04X})", self.0)
    }
}

/// Raw scalar from a restriction's `values` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRestrictionValue {
    Number(u64),
    Text(String),
}

/// Decoded restriction value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RestrictionValue {
    Address(Address),
    MosaicId(MosaicId),
    OperationCode(u16),
}

impl RestrictionValue {
    pub fn target_type(&self) -> TargetType {
        match self {
            RestrictionValue::Address(_) => TargetType::Address,
            RestrictionValue::MosaicId(_) => TargetType::MosaicId,
            RestrictionValue::OperationCode(_) => TargetType::OperationCode,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            RestrictionValue::Address(address) => Some(address),
            _ => None,
        }
    }

    pub fn as_mosaic_id(&self) -> Option<&MosaicId> {
        match self {
            RestrictionValue::MosaicId(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_operation_code(&self) -> Option<u16> {
        match self {
            RestrictionValue::OperationCode(code) => Some(*code),
            _ => None,
        }
    }
}

/// Decode the raw values of one restriction according to its flag.
///
/// The target type is resolved once and the same rule is applied to every
/// element. Output order and length match the input.
pub fn decode(flag: RestrictionFlag, raw_values: &[RawRestrictionValue]) -> AppResult<Vec<RestrictionValue>> {
    let target = flag.target_type()?;

    raw_values
        .iter()
        .enumerate()
        .map(|(index, raw)| decode_value(target, index, raw))
        .collect()
}

fn decode_value(target: TargetType, index: usize, raw: &RawRestrictionValue) -> AppResult<RestrictionValue> {
    let invalid = |reason: String| AppError::InvalidRestrictionValue { index, reason };

    match (target, raw) {
        (TargetType::Address, RawRestrictionValue::Text(encoded)) => Address::from_encoded(encoded)
            .map(RestrictionValue::Address)
            .map_err(|e| invalid(e.to_string())),
        (TargetType::MosaicId, RawRestrictionValue::Text(hex_id)) => MosaicId::from_hex(hex_id)
            .map(RestrictionValue::MosaicId)
            .map_err(|e| invalid(e.to_string())),
        (TargetType::OperationCode, RawRestrictionValue::Number(code)) => u16::try_from(*code)
            .map(RestrictionValue::OperationCode)
            .map_err(|_| invalid(format!("operation code {} out of range", code))),
        (TargetType::OperationCode, RawRestrictionValue::Text(_)) => {
            Err(invalid("expected a number for an operation code".to_string()))
        }
        (_, RawRestrictionValue::Number(_)) => {
            Err(invalid("expected a string for an address or mosaic id".to_string()))
        }
    }
}

/// A single restriction with decoded values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRestriction {
    pub flag: RestrictionFlag,
    pub values: Vec<RestrictionValue>,
}

impl AccountRestriction {
    /// Decode a restriction from its flag and raw values
    pub fn decode(flag: RestrictionFlag, raw_values: &[RawRestrictionValue]) -> AppResult<Self> {
        Ok(Self {
            flag,
            values: decode(flag, raw_values)?,
        })
    }
}

/// All restrictions attached to one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRestrictionsInfo {
    pub version: u32,
    pub address: Address,
    pub restrictions: Vec<AccountRestriction>,
}

impl AccountRestrictionsInfo {
    /// Total decoded values across all restrictions
    pub fn value_count(&self) -> usize {
        self.restrictions.iter().map(|r| r.values.len()).sum()
    }
}
