use rxd_primitives::PrimitivesError;

/// Error types for transaction and block operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The buffer ended while reading `field`.
    #[error("truncated input reading {field}: {source}")]
    Truncated {
        field: &'static str,
        #[source]
        source: PrimitivesError,
    },
    /// `from_bytes` decoded a transaction but bytes were left over.
    #[error("trailing {0} bytes after transaction")]
    TrailingBytes(usize),
    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// An output script could not be scanned for push input references
    /// (forwarded from `rxd-script`).
    #[error("script error: {0}")]
    Script(#[from] rxd_script::ScriptError),
    /// An underlying primitives error (forwarded from `rxd-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

impl TransactionError {
    /// Whether this error was caused by reading past the end of a buffer,
    /// including a truncated output script.
    pub fn is_truncated(&self) -> bool {
        match self {
            TransactionError::Truncated { .. } => true,
            TransactionError::Script(e) => e.is_truncated(),
            TransactionError::Primitives(e) => e.is_truncated(),
            _ => false,
        }
    }
}

impl From<hex::FromHexError> for TransactionError {
    fn from(e: hex::FromHexError) -> Self {
        TransactionError::InvalidHex(e.to_string())
    }
}

/// Map a cursor error to `Truncated`, naming the field being read.
pub(crate) fn reading(field: &'static str) -> impl FnOnce(PrimitivesError) -> TransactionError {
    move |source| TransactionError::Truncated { field, source }
}
