use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Length of a fingerprint in bytes (128 bits).
pub const FINGERPRINT_LEN: usize = 16;

/// Digest summarizing the content of every tracked file.
///
/// Two fingerprints are equal iff the tracked content they were computed
/// from is byte-identical. A fingerprint names a snapshot directory and joins
/// snapshots to ledger records, so it always travels as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Create a `Fingerprint` from a pre-computed digest.
    pub const fn from_digest(digest: [u8; FINGERPRINT_LEN]) -> Self {
        Self(digest)
    }

    /// The raw 16-byte digest.
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Hex-encoded string representation (32 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != FINGERPRINT_LEN {
            return Err(TypeError::InvalidLength {
                expected: FINGERPRINT_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; FINGERPRINT_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.to_hex()
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_is_32_chars() {
        let fp = Fingerprint::from_digest([0xab; FINGERPRINT_LEN]);
        assert_eq!(fp.to_hex().len(), 32);
        assert_eq!(fp.to_hex(), "ab".repeat(16));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let fp = Fingerprint::from_digest([7; FINGERPRINT_LEN]);
        assert_eq!(fp.short_hex(), "07070707");
    }

    #[test]
    fn display_is_full_hex() {
        let fp = Fingerprint::from_digest([1; FINGERPRINT_LEN]);
        assert_eq!(format!("{fp}"), fp.to_hex());
    }

    #[test]
    fn rejects_short_input() {
        let err = Fingerprint::from_hex("deadbeef").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 16,
                actual: 4
            }
        );
    }

    #[test]
    fn rejects_non_hex() {
        let err = Fingerprint::from_hex("../../etc/passwd").unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn serializes_as_hex_string() {
        let fp = Fingerprint::from_digest([0x0f; FINGERPRINT_LEN]);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(16)));
        let parsed: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fp);
    }

    #[test]
    fn deserialize_rejects_bad_hash() {
        let result: Result<Fingerprint, _> = serde_json::from_str("\"xyz\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn parse_accepts_own_hex(bytes in proptest::array::uniform16(any::<u8>())) {
            let fp = Fingerprint::from_digest(bytes);
            prop_assert_eq!(fp.to_hex().parse::<Fingerprint>().unwrap(), fp);
        }
    }
}
