use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ConsulError;

/// A 20-byte caller identity.
///
/// Addresses are opaque to the registry: the external sequencer authenticates
/// them, the core only tests them for role membership. Serialized as a
/// `0x`-prefixed hex string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; Address::LENGTH]);

impl Address {
    /// The number of bytes in an address
    pub const LENGTH: usize = 20;

    /// The all-zero address
    pub const ZERO: Address = Address([0; Address::LENGTH]);

    /// Wrap a raw byte array
    pub const fn new(bytes: [u8; Address::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Reference to the underlying bytes
    pub fn as_bytes(&self) -> &[u8; Address::LENGTH] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex rendering
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; Address::LENGTH]> for Address {
    fn from(bytes: [u8; Address::LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = ConsulError;

    /// Parse from hex, with or without a `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(stripped).map_err(|e| ConsulError::InvalidHex {
            field: "address",
            reason: e.to_string(),
        })?;
        if raw.len() != Address::LENGTH {
            return Err(ConsulError::InvalidHex {
                field: "address",
                reason: format!("expected {} bytes, got {}", Address::LENGTH, raw.len()),
            });
        }
        let mut out = [0u8; Address::LENGTH];
        out.copy_from_slice(&raw);
        Ok(Self(out))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
