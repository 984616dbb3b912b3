//! Hash function primitives for the Radiant codec.
//!
//! Provides SHA-256, double SHA-256, RIPEMD-160, Hash160 and the
//! SHA-512/256 variants Radiant uses for block headers and the
//! `OP_SHA512_256` / `OP_HASH512_256` opcodes.

use sha2::{Digest, Sha256, Sha512_256};
use ripemd::Ripemd160;

/// Length of a hashX index key, a truncated SHA-256 of a script.
pub const HASHX_LEN: usize = 11;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d) hash of the input data.
///
/// This is the hash used for legacy transaction IDs, the version 3
/// preimage components and Base58Check checksums. Computes
/// SHA-256(SHA-256(data)).
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Compute SHA-512/256 of the input data.
///
/// This is SHA-512 with the distinct FIPS 180-4 initial values,
/// truncated to 256 bits; it is not a plain truncation of SHA-512.
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-512/256: SHA-512/256(SHA-512/256(data)).
///
/// Used for Radiant block header hashes.
pub fn sha512_256d(data: &[u8]) -> [u8; 32] {
    sha512_256(&sha512_256(data))
}
