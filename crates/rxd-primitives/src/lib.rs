/// Radiant indexer codec - Cryptographic primitives, hashing, and utilities.
///
/// This crate provides the foundational building blocks for the codec:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160, SHA-512/256d)
/// - Chain hash type for transaction and block identification
/// - Byte cursor and writer with variable-length integer encoding
/// - Base58 and Base58Check encoding/decoding

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod base58;

mod error;
pub use error::PrimitivesError;
