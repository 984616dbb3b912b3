//! Block-level decoding.
//!
//! A block is an 80-byte header, a varint transaction count and that many
//! transactions. Bytes after the last transaction are ignored.

use log::debug;
use rxd_primitives::chainhash::{double_hash_512_256_h, Hash};
use rxd_primitives::util::ByteCursor;

use crate::error::reading;
use crate::transaction::{read_tx_and_hash, Transaction};
use crate::TransactionError;

/// Size of a block header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Hash of a block header: double SHA-512/256.
pub fn header_hash(header: &[u8]) -> Hash {
    double_hash_512_256_h(header)
}

/// The previous block hash stored in a header (bytes 4..36), in internal
/// byte order. Returns `None` for a header shorter than 36 bytes.
pub fn header_prev_hash(header: &[u8]) -> Option<Hash> {
    header.get(4..36).and_then(|b| Hash::from_bytes(b).ok())
}

/// Read a varint transaction count followed by that many transactions,
/// pairing each with its ID.
///
/// The cursor is left just after the last transaction; any bytes beyond
/// it are not examined.
pub fn read_tx_block(cursor: &mut ByteCursor<'_>) -> Result<Vec<(Transaction, Hash)>, TransactionError> {
    let count = cursor.read_varint().map_err(reading("transaction count"))?;
    let capacity = usize::try_from(count.value())
        .unwrap_or(usize::MAX)
        .min(cursor.remaining());
    let mut txs = Vec::with_capacity(capacity);
    for _ in 0..count.value() {
        txs.push(read_tx_and_hash(cursor)?);
    }
    debug!("decoded block with {} transactions", txs.len());
    Ok(txs)
}

/// A decoded block: the raw bytes, the header and every transaction
/// paired with its ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub raw: Vec<u8>,
    pub header: [u8; HEADER_SIZE],
    pub txs: Vec<(Transaction, Hash)>,
}

impl Block {
    /// Decode a raw block.
    ///
    /// # Returns
    /// The block, or `Truncated` if the header or any transaction is cut
    /// short.
    pub fn from_bytes(raw: Vec<u8>) -> Result<Self, TransactionError> {
        let mut cursor = ByteCursor::new(&raw);
        let header: [u8; HEADER_SIZE] = cursor.read_array().map_err(reading("block header"))?;
        let txs = read_tx_block(&mut cursor)?;
        Ok(Block { raw, header, txs })
    }

    /// Hash of the block header.
    pub fn hash(&self) -> Hash {
        header_hash(&self.header)
    }

    /// Hash of the previous block.
    pub fn prev_hash(&self) -> Hash {
        let mut prev = [0u8; 32];
        prev.copy_from_slice(&self.header[4..36]);
        Hash::new(prev)
    }
}
