/// Radiant transaction and block codec.
///
/// Provides the Transaction type with its inputs and outputs, binary/hex
/// serialization, the legacy and version 3 transaction ID schemes, and
/// block-level decoding into (transaction, ID) pairs.

pub mod transaction;
pub mod input;
pub mod output;
pub mod txid;
pub mod block;

mod error;
pub use error::TransactionError;
pub use transaction::{read_tx_and_hash, Transaction};
pub use input::TxInput;
pub use output::TxOutput;
pub use block::{read_tx_block, Block};
