//! Mosaic (asset) identifier value type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::{AppError, AppResult};

/// 64-bit mosaic identifier, carried on the wire as 16 hex characters
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MosaicId(u64);

impl MosaicId {
    /// Build a mosaic id from its 16 character hex form
    pub fn from_hex(hex_id: &str) -> AppResult<Self> {
        if hex_id.len() != 16 {
            return Err(AppError::InvalidMosaicId(format!(
                "expected 16 hex characters, got {}",
                hex_id.len()
            )));
        }

        let mut bytes = [0u8; 8];
        hex::decode_to_slice(hex_id, &mut bytes)
            .map_err(|e| AppError::InvalidMosaicId(format!("{}: {}", hex_id, e)))?;

        Ok(Self(u64::from_be_bytes(bytes)))
    }

    /// Build a mosaic id from its numeric value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Numeric value
    pub fn id(&self) -> u64 {
        self.0
    }

    /// Upper case, zero padded hex form
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0.to_be_bytes())
    }
}

impl fmt::Debug for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MosaicId").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for MosaicId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for MosaicId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for MosaicId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_id = String::deserialize(deserializer)?;
        Self::from_hex(&hex_id).map_err(serde::de::Error::custom)
    }
}
