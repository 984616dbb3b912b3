//! Core transaction type.
//!
//! Represents a transaction with version, inputs, outputs and locktime.
//! Supports binary and hex serialization, transaction ID computation and
//! coinbase detection.

use rxd_primitives::chainhash::Hash;
use rxd_primitives::util::{ByteCursor, ByteWriter, VarInt};

use crate::error::reading;
use crate::input::TxInput;
use crate::output::TxOutput;
use crate::txid::compute_tx_id;
use crate::TransactionError;

/// A transaction.
///
/// Input and output order is significant for both serialization and the
/// transaction ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction version. Version 3 selects the alternative txid scheme.
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub locktime: u32,
}

impl Transaction {
    /// Create an empty version 1 transaction.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            locktime: 0,
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    /// Parse a transaction from bytes that hold exactly one transaction.
    ///
    /// # Returns
    /// The transaction, or `TrailingBytes` if anything follows it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut cursor = ByteCursor::new(bytes);
        let tx = Self::read_from(&mut cursor)?;
        if cursor.remaining() != 0 {
            return Err(TransactionError::TrailingBytes(cursor.remaining()));
        }
        Ok(tx)
    }

    /// Read one transaction from the cursor, leaving it positioned just
    /// after the locktime.
    ///
    /// Fields are read in wire order: version, varint input count, inputs,
    /// varint output count, outputs, locktime.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, TransactionError> {
        let version = cursor.read_i32_le().map_err(reading("version"))?;

        let input_count = cursor.read_varint().map_err(reading("input count"))?;
        let mut inputs = Vec::with_capacity(capacity_hint(input_count, cursor));
        for _ in 0..input_count.value() {
            inputs.push(TxInput::read_from(cursor)?);
        }

        let output_count = cursor.read_varint().map_err(reading("output count"))?;
        let mut outputs = Vec::with_capacity(capacity_hint(output_count, cursor));
        for _ in 0..output_count.value() {
            outputs.push(TxOutput::read_from(cursor)?);
        }

        let locktime = cursor.read_u32_le().map_err(reading("locktime"))?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            locktime,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize the transaction to its wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(256);
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Serialize the transaction into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_i32_le(self.version);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(writer);
        }

        writer.write_u32_le(self.locktime);
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> usize {
        self.to_bytes().len()
    }

    // -----------------------------------------------------------------
    // Transaction ID
    // -----------------------------------------------------------------

    /// Compute the transaction ID from the canonical serialization.
    ///
    /// Decoding is canonical, so this equals the ID computed from the
    /// source bytes by [`read_tx_and_hash`].
    pub fn tx_id(&self) -> Result<Hash, TransactionError> {
        compute_tx_id(self, &self.to_bytes())
    }

    // -----------------------------------------------------------------
    // Coinbase detection
    // -----------------------------------------------------------------

    /// Whether this is a coinbase transaction: exactly one input, and
    /// that input is a generation input.
    pub fn is_coinbase(&self) -> bool {
        matches!(self.inputs.as_slice(), [input] if input.is_generation())
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

/// Preallocation bound for a decoded element count. The count is
/// untrusted, so never reserve more slots than bytes remain.
fn capacity_hint(count: VarInt, cursor: &ByteCursor<'_>) -> usize {
    usize::try_from(count.value())
        .unwrap_or(usize::MAX)
        .min(cursor.remaining())
}

/// Read one transaction and compute its ID.
///
/// Legacy transactions are hashed over the exact byte range they occupied
/// in the source buffer.
///
/// # Returns
/// The transaction and its ID in internal byte order.
pub fn read_tx_and_hash(cursor: &mut ByteCursor<'_>) -> Result<(Transaction, Hash), TransactionError> {
    let start = cursor.position();
    let tx = Transaction::read_from(cursor)?;
    let id = compute_tx_id(&tx, cursor.slice(start, cursor.position()))?;
    Ok((tx, id))
}

/// Read one transaction and return it with the length of the whole
/// source buffer as its virtual size.
pub fn read_tx_and_vsize(cursor: &mut ByteCursor<'_>) -> Result<(Transaction, usize), TransactionError> {
    let tx = Transaction::read_from(cursor)?;
    Ok((tx, cursor.buffer().len()))
}
