/// Error types for script operations.
///
/// Covers tokenizer truncation, hex decoding of scripts and the
/// address-to-script conversion.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// A push length or push payload ran past the end of the script.
    /// `offset` is the position of the opcode whose operand was cut short.
    #[error("truncated script at offset {offset}")]
    Truncated { offset: usize },

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// An ASM token is neither an opcode name nor valid hex push data.
    #[error("invalid asm token '{0}'")]
    InvalidAsm(String),

    /// Attempted to append a push opcode without its operand.
    #[error("use append_push_data for push opcodes: {0}")]
    InvalidOpcodeType(String),

    /// Hash160 payload of an address is not 20 bytes.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// The address version prefix matches neither P2PKH nor P2SH.
    #[error("unknown version byte for address '{0}'")]
    UnknownAddressVersion(String),

    /// Error from primitives crate (Base58 decoding, checksum).
    #[error("primitives error: {0}")]
    Primitives(#[from] rxd_primitives::PrimitivesError),
}

impl ScriptError {
    /// Whether this error was caused by reading past the end of a buffer.
    pub fn is_truncated(&self) -> bool {
        match self {
            ScriptError::Truncated { .. } => true,
            ScriptError::Primitives(e) => e.is_truncated(),
            _ => false,
        }
    }
}

impl From<hex::FromHexError> for ScriptError {
    fn from(e: hex::FromHexError) -> Self {
        ScriptError::InvalidHex(e.to_string())
    }
}
