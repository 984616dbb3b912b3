//! Chain hash type for transaction and block identification.
//!
//! Provides a `Hash` type, a 32-byte array kept in the natural order the
//! digest was computed in. Only the human-readable form is byte-reversed,
//! matching the convention for transaction IDs and block hashes. Stored
//! and compared hashes are never reversed.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize, Serializer, Deserializer};
use crate::hash::{sha256d, sha512_256d};
use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte hash used for transaction IDs and block hashes.
///
/// When displayed as a string, the bytes are reversed to match the
/// standard representation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from a raw 32-byte array in internal order.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            ))
        })?;
        Ok(Hash(arr))
    }

    /// Create a Hash from its display (byte-reversed) hex string.
    ///
    /// # Arguments
    /// * `hex_str` - Exactly 64 hex characters.
    ///
    /// # Returns
    /// `Ok(Hash)` on success, or an error for invalid hex or length.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&hex_str_to_hash(hex_str)?)
    }

    /// Access the internal byte array as a reference.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Consume the hash and return the internal bytes.
    pub fn into_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Display the hash as byte-reversed hex.
///
/// Internal bytes `[0x06, 0xe5, ...]` display as `"...e506"`.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hash_to_hex_str(&self.0))
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

/// Serialize as the display hex string in JSON.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Convert a hash in natural byte order to its displayed hex string.
///
/// The display form is the byte-reversed hex encoding.
pub fn hash_to_hex_str(bytes: &[u8]) -> String {
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    hex::encode(reversed)
}

/// Convert a displayed hex string back to a hash in natural byte order.
pub fn hex_str_to_hash(hex_str: &str) -> Result<Vec<u8>, PrimitivesError> {
    let mut bytes = hex::decode(hex_str)?;
    bytes.reverse();
    Ok(bytes)
}

/// Compute double SHA-256 of the input and return the result as a Hash.
pub fn double_hash_h(data: &[u8]) -> Hash {
    Hash(sha256d(data))
}

/// Compute double SHA-512/256 of the input and return the result as a Hash.
pub fn double_hash_512_256_h(data: &[u8]) -> Hash {
    Hash(sha512_256d(data))
}
