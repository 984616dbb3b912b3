//! Transaction input referencing a previous output.
//!
//! Contains the previous transaction hash, output index, unlocking script
//! and sequence number, with binary serialization following the wire
//! format.

use std::fmt;

use rxd_primitives::chainhash::hash_to_hex_str;
use rxd_primitives::util::{ByteCursor, ByteWriter};
use rxd_script::Script;

use crate::error::reading;
use crate::TransactionError;

/// Default sequence number indicating a finalized input (no relative lock-time).
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// Output index used by generation (coinbase) inputs.
pub const GENERATION_PREV_IDX: u32 = 0xFFFF_FFFF;

/// A single input in a transaction.
///
/// # Wire format
///
/// | Field      | Size          |
/// |------------|---------------|
/// | prev_hash  | 32 bytes      |
/// | prev_idx   | 4 bytes (LE)  |
/// | script     | varbytes      |
/// | sequence   | 4 bytes (LE)  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Hash of the transaction being spent, in internal byte order.
    pub prev_hash: [u8; 32],
    /// Index of the output within that transaction.
    pub prev_idx: u32,
    /// The unlocking script (scriptSig).
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxInput {
    /// Create an input spending output `prev_idx` of `prev_hash`, with an
    /// empty unlocking script and a finalized sequence.
    pub fn new(prev_hash: [u8; 32], prev_idx: u32) -> Self {
        TxInput {
            prev_hash,
            prev_idx,
            script_sig: Script::new(),
            sequence: DEFAULT_SEQUENCE_NUMBER,
        }
    }

    /// Test if this input is generation/coinbase like: output index
    /// 0xFFFFFFFF and an all-zero previous hash.
    pub fn is_generation(&self) -> bool {
        self.prev_idx == GENERATION_PREV_IDX && self.prev_hash == [0u8; 32]
    }

    /// Deserialize a `TxInput` from a `ByteCursor`.
    ///
    /// # Arguments
    /// * `cursor` - The cursor positioned at the start of an encoded input.
    ///
    /// # Returns
    /// `Ok(TxInput)` on success, or `TransactionError::Truncated` naming
    /// the field that ran past the end of the buffer.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, TransactionError> {
        let prev_hash = cursor.read_array().map_err(reading("input prev_hash"))?;
        let prev_idx = cursor.read_u32_le().map_err(reading("input prev_idx"))?;
        let script = cursor.read_var_bytes().map_err(reading("input script"))?;
        let sequence = cursor.read_u32_le().map_err(reading("input sequence"))?;

        Ok(TxInput {
            prev_hash,
            prev_idx,
            script_sig: Script::from_bytes(script),
            sequence,
        })
    }

    /// Serialize this input into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.prev_hash);
        writer.write_u32_le(self.prev_idx);
        writer.write_var_bytes(self.script_sig.to_bytes());
        writer.write_u32_le(self.sequence);
    }
}

impl fmt::Display for TxInput {
    /// `Input(<prev hash>, <idx>, script=<hex>, sequence=<n>)`, with the
    /// previous hash in display (reversed) order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Input({}, {}, script={}, sequence={})",
            hash_to_hex_str(&self.prev_hash),
            self.prev_idx,
            self.script_sig.to_hex(),
            self.sequence
        )
    }
}
