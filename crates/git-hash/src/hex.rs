//! Lowercase hex rendering and case-insensitive parsing of digests.

use crate::{HashError, HEX_LEN};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Value of a single ASCII hex digit, accepting either case.
const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Write the lowercase hex form of `bytes` into `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than `bytes.len() * 2`.
pub fn encode_into(bytes: &[u8], out: &mut [u8]) {
    assert!(out.len() >= bytes.len() * 2, "encode_into: buffer too short");
    for (pair, &b) in out.chunks_exact_mut(2).zip(bytes) {
        pair[0] = DIGITS[(b >> 4) as usize];
        pair[1] = DIGITS[(b & 0x0f) as usize];
    }
}

/// Lowercase hex string of `bytes`, two characters per byte, no separators.
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode `hex` into `out`. `hex` must be exactly `out.len() * 2` characters.
pub fn decode_into(hex: &str, out: &mut [u8]) -> Result<(), HashError> {
    let hex = hex.as_bytes();
    if hex.len() != out.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: out.len() * 2,
            actual: hex.len(),
        });
    }
    for (i, pair) in hex.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0]).ok_or(HashError::InvalidHex {
            position: i * 2,
            character: pair[0] as char,
        })?;
        let lo = nibble(pair[1]).ok_or(HashError::InvalidHex {
            position: i * 2 + 1,
            character: pair[1] as char,
        })?;
        out[i] = (hi << 4) | lo;
    }
    Ok(())
}

/// Whether `s` has the shape of a SHA-1 digest: 40 hex digits in any case.
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == HEX_LEN && s.bytes().all(|b| nibble(b).is_some())
}
