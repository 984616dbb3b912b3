/// Error types for coin parameter lookup and chain helpers.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// No coin is configured for this name and network.
    #[error("unknown coin {name} and network {net} combination")]
    UnknownCoin { name: String, net: String },

    /// The network name is not one of the supported networks.
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    /// The first block does not hash to the configured genesis hash.
    #[error("genesis block has hash {got} expected {expected}")]
    GenesisMismatch { got: String, expected: String },

    /// Address conversion failed (forwarded from `rxd-script`).
    #[error("script error: {0}")]
    Script(#[from] rxd_script::ScriptError),

    /// Block decoding failed (forwarded from `rxd-transaction`).
    #[error("transaction error: {0}")]
    Transaction(#[from] rxd_transaction::TransactionError),
}

impl ChainError {
    /// Whether this error was caused by reading past the end of a buffer.
    pub fn is_truncated(&self) -> bool {
        match self {
            ChainError::Script(e) => e.is_truncated(),
            ChainError::Transaction(e) => e.is_truncated(),
            _ => false,
        }
    }
}
