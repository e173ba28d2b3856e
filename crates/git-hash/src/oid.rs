use std::fmt;
use std::str::FromStr;

use crate::hex::{decode_into, to_hex_string};
use crate::{HashError, DIGEST_LEN, HEX_LEN};

/// A git object id: the SHA-1 digest of an object's header and content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; DIGEST_LEN]);

impl ObjectId {
    /// The id of the empty blob, `blob 0\0`.
    pub const EMPTY_BLOB: Self = Self([
        0xe6, 0x9d, 0xe2, 0x9b, 0xb2, 0xd1, 0xd6, 0x43, 0x4b, 0x8b, 0x29, 0xae, 0x77, 0x5a, 0xd8,
        0xc2, 0xe4, 0x8c, 0x53, 0x91,
    ]);

    /// Wrap a raw digest.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Create an ObjectId from a raw digest slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| HashError::InvalidHashLength {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Parse a 40-character hex string in any case.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        let mut bytes = [0u8; DIGEST_LEN];
        decode_into(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex representation, always 40 characters.
    pub fn to_hex(&self) -> String {
        to_hex_string(&self.0)
    }

    /// Compare against a caller-supplied hex string, ignoring ASCII case.
    ///
    /// Strings of the wrong length or containing non-hex characters never
    /// match. The comparison is ordinal and does not depend on locale.
    pub fn matches_hex(&self, hex: &str) -> bool {
        hex.len() == HEX_LEN && self.to_hex().eq_ignore_ascii_case(hex)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
