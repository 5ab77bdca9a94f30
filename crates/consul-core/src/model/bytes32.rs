use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::errors::ConsulError;

/// A 32-byte value; used for praetor ids, payload ids and the command register.
///
/// Serialized as a `0x`-prefixed hex string. The all-zero value is the
/// tombstone id written over removed praetor slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Bytes32([u8; Bytes32::LENGTH]);

impl Bytes32 {
    /// The number of bytes in the value
    pub const LENGTH: usize = 32;

    /// The all-zero value
    pub const ZERO: Bytes32 = Bytes32([0; Bytes32::LENGTH]);

    /// Wrap a raw byte array
    pub const fn new(bytes: [u8; Bytes32::LENGTH]) -> Self {
        Self(bytes)
    }

    /// SHA-256 digest of arbitrary input
    pub fn hash_of<T: AsRef<[u8]>>(data: T) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data.as_ref());
        let digest = hasher.finalize();
        let mut out = [0u8; Bytes32::LENGTH];
        out.copy_from_slice(&digest);
        Self(out)
    }

    /// Reference to the underlying bytes
    pub fn as_bytes(&self) -> &[u8; Bytes32::LENGTH] {
        &self.0
    }

    /// Whether this is the all-zero value
    pub fn is_zero(&self) -> bool {
        self.0 == [0; Bytes32::LENGTH]
    }

    /// `0x`-prefixed lowercase hex rendering
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; Bytes32::LENGTH]> for Bytes32 {
    fn from(bytes: [u8; Bytes32::LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Bytes32 {
    type Err = ConsulError;

    /// Parse from hex, with or without a `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(stripped).map_err(|e| ConsulError::InvalidHex {
            field: "bytes32",
            reason: e.to_string(),
        })?;
        if raw.len() != Bytes32::LENGTH {
            return Err(ConsulError::InvalidHex {
                field: "bytes32",
                reason: format!("expected {} bytes, got {}", Bytes32::LENGTH, raw.len()),
            });
        }
        let mut out = [0u8; Bytes32::LENGTH];
        out.copy_from_slice(&raw);
        Ok(Self(out))
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_of_deterministic() {
        let a = Bytes32::hash_of(b"REPORT");
        let b = Bytes32::hash_of(b"REPORT");
        assert_eq!(a, b);
        assert!(!a.is_zero());
    }

    #[test]
    fn test_hash_of_distinguishes_inputs() {
        assert_ne!(Bytes32::hash_of(b"REPORT"), Bytes32::hash_of(b"report"));
    }

    #[test]
    fn test_hex_round_trip() {
        let value = Bytes32::hash_of(b"round trip");
        let parsed: Bytes32 = value.to_hex().parse().unwrap();
        assert_eq!(parsed, value);

        // Unprefixed hex parses too
        let unprefixed: Bytes32 = value.to_hex()[2..].parse().unwrap();
        assert_eq!(unprefixed, value);
    }

    #[test]
    fn test_rejects_wrong_width() {
        let result = "0x1234".parse::<Bytes32>();
        assert!(matches!(result, Err(ConsulError::InvalidHex { .. })));
    }

    #[test]
    fn test_rejects_non_hex() {
        let result = "0xzz".parse::<Bytes32>();
        assert!(matches!(result, Err(ConsulError::InvalidHex { .. })));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let value = Bytes32::hash_of(b"serde");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", value.to_hex()));
        let back: Bytes32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
