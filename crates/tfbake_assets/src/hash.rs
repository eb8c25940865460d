//! # ContentHash - Content-Addressable Asset Identifier
//!
//! SHA-1 digest of a generated asset's bytes, rendered as lowercase hex.
//! The hex form is both the asset's filename stem and the `sha` field
//! that save records use to point at it.

use std::fmt;

use serde::{Serialize, Serializer};
use sha1::{Digest, Sha1};

/// Length of a SHA-1 digest in bytes.
pub const HASH_LEN: usize = 20;

/// Content-addressable asset identifier.
///
/// Two byte-identical assets always share a `ContentHash`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; HASH_LEN]);

impl ContentHash {
    /// Hashes raw content bytes.
    #[must_use]
    pub fn from_content(data: &[u8]) -> Self {
        Self(Sha1::digest(data).into())
    }

    /// Parses a 40-character hex string.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let mut bytes = [0u8; HASH_LEN];
        hex::decode_to_slice(s, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    /// Lowercase hex rendering (40 characters).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw digest bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Returns true if `data` hashes to this value.
    #[must_use]
    pub fn verify(&self, data: &[u8]) -> bool {
        Self::from_content(data) == *self
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.to_hex()[..12])
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
