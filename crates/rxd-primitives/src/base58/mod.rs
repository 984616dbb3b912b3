//! Base58 encoding and decoding with optional checksum support.
//!
//! Provides raw Base58 encode/decode and Base58Check encode/decode used
//! for Radiant addresses. The checksum hash defaults to double SHA-256
//! but can be swapped for chains that use another digest.

use crate::PrimitivesError;
use crate::hash::sha256d;

/// Bitcoin's modified Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity.
pub const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Digest used to derive the 4-byte Base58Check checksum.
pub type ChecksumFn = fn(&[u8]) -> [u8; 32];

/// Encode a byte slice to a Base58 string.
///
/// Uses Bitcoin's modified Base58 alphabet. Leading zero bytes
/// are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for an empty string or any
/// character outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    if s.is_empty() {
        return Err(PrimitivesError::EmptyBase58);
    }
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                PrimitivesError::InvalidBase58Character { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => {
                let character = s
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                PrimitivesError::InvalidBase58Character { character, index }
            }
            _ => PrimitivesError::InvalidBase58Character {
                character: char::REPLACEMENT_CHARACTER,
                index: 0,
            },
        })
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte(s) + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    check_encode_with(data, sha256d)
}

/// Encode a byte slice with a 4-byte checksum taken from `hash_fn`.
///
/// The result is `encode(data || hash_fn(data)[..4])`.
pub fn check_encode_with(data: &[u8], hash_fn: ChecksumFn) -> String {
    let checksum = hash_fn(data);
    let mut payload = Vec::with_capacity(data.len() + 4);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..4]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte double-SHA-256 checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or an
/// error for invalid encoding or checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    check_decode_with(s, sha256d)
}

/// Decode a Base58Check string whose checksum was produced by `hash_fn`.
///
/// Strings that decode to fewer than 4 bytes cannot carry a checksum and
/// fail with `ChecksumMismatch`.
pub fn check_decode_with(s: &str, hash_fn: ChecksumFn) -> Result<Vec<u8>, PrimitivesError> {
    let mut decoded = decode(s)?;
    if decoded.len() < 4 {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    let split = decoded.len() - 4;
    let expected = hash_fn(&decoded[..split]);
    if decoded[split..] != expected[..4] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    decoded.truncate(split);
    Ok(decoded)
}
