/// Unified error type for all primitives operations.
///
/// Covers errors from byte cursor reads, Base58 decoding and hash parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    #[error("truncated input: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("invalid base 58 character {character:?} at index {index}")]
    InvalidBase58Character { character: char, index: usize },

    #[error("base 58 string cannot be empty")]
    EmptyBase58,

    #[error("invalid base 58 checksum")]
    ChecksumMismatch,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),
}

impl PrimitivesError {
    /// Whether this error was caused by reading past the end of a buffer.
    pub fn is_truncated(&self) -> bool {
        matches!(self, PrimitivesError::Truncated { .. })
    }
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
