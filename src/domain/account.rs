//! Account address value type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::{AppError, AppResult};

/// Known network identifiers carried in the first address byte
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    MainNet,
    TestNet,
    Private,
    PrivateTest,
}

impl NetworkType {
    /// Network identifier byte
    pub fn identifier(&self) -> u8 {
        match self {
            NetworkType::MainNet => 0x68,
            NetworkType::TestNet => 0x98,
            NetworkType::Private => 0x78,
            NetworkType::PrivateTest => 0xA8,
        }
    }
}

impl TryFrom<u8> for NetworkType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x68 => Ok(NetworkType::MainNet),
            0x98 => Ok(NetworkType::TestNet),
            0x78 => Ok(NetworkType::Private),
            0xA8 => Ok(NetworkType::PrivateTest),
            other => Err(other),
        }
    }
}

/// Account address in its decoded 24-byte form.
///
/// The wire carries addresses hex encoded. The first byte is the network
/// identifier; the remaining bytes are opaque to this layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; Address::SIZE]);

impl Address {
    /// Decoded address size in bytes
    pub const SIZE: usize = 24;

    /// Build an address from its hex encoded wire form
    pub fn from_encoded(encoded: &str) -> AppResult<Self> {
        if encoded.len() != Self::SIZE * 2 {
            return Err(AppError::InvalidAddress(format!(
                "expected {} hex characters, got {}",
                Self::SIZE * 2,
                encoded.len()
            )));
        }

        let mut bytes = [0u8; Self::SIZE];
        hex::decode_to_slice(encoded, &mut bytes)
            .map_err(|e| AppError::InvalidAddress(format!("{}: {}", encoded, e)))?;

        Ok(Self(bytes))
    }

    /// Build an address from raw bytes
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    /// Hex encoded (upper case) wire form
    pub fn encoded(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Network the address belongs to, if the identifier byte is known
    pub fn network_type(&self) -> Option<NetworkType> {
        NetworkType::try_from(self.0[0]).ok()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.encoded()).finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl std::str::FromStr for Address {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_encoded(s)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_encoded(&encoded).map_err(serde::de::Error::custom)
    }
}
