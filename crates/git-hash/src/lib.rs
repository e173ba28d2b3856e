//! SHA-1 object identity for git blobs.
//!
//! This crate provides the `ObjectId` type, hex encoding/decoding, and the
//! streaming `Hasher` that produces git object ids from raw content.

mod error;
pub mod hex;
mod oid;
pub mod hasher;

pub use error::HashError;
pub use oid::ObjectId;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a SHA-1 digest rendered as hex.
pub const HEX_LEN: usize = DIGEST_LEN * 2;
