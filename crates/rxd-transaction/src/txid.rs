//! Transaction ID derivation.
//!
//! Two schemes, selected by the transaction version:
//!
//! * **Legacy** (any version other than 3): double SHA-256 of the exact
//!   serialized bytes.
//! * **Version 3**: double SHA-256 of a fixed-size preimage that commits
//!   to the inputs, sequences and outputs through separate digests. Only
//!   script hashes enter the preimage, so an ID can be recomputed and
//!   partially verified without the full scripts.
//!
//! Version 3 preimage layout:
//!
//! | Field               | Size            |
//! |---------------------|-----------------|
//! | version             | 4 bytes (u32 LE)|
//! | input count         | 4 bytes (i32 LE)|
//! | hash_prev_inputs    | 32 bytes        |
//! | hash_sequence       | 32 bytes        |
//! | output count        | 4 bytes (i32 LE)|
//! | hash_output_hashes  | 32 bytes        |
//! | locktime            | 4 bytes (u32 LE)|

use log::trace;
use rxd_primitives::chainhash::Hash;
use rxd_primitives::hash::sha256d;
use rxd_primitives::util::ByteWriter;
use rxd_script::chunk::extract_push_input_refs;
use rxd_script::ScriptError;

use crate::input::TxInput;
use crate::output::TxOutput;
use crate::transaction::Transaction;
use crate::TransactionError;

/// The transaction version that selects the version 3 ID scheme.
pub const V3_TX_VERSION: i32 = 3;

/// Size of the version 3 preimage in bytes.
pub const V3_PREIMAGE_SIZE: usize = 4 + 4 + 32 + 32 + 4 + 32 + 4;

/// Size of a push reference digest: a u32 count and a 32-byte hash.
pub const PUSH_REFS_DIGEST_SIZE: usize = 4 + 32;

/// Legacy transaction ID: double SHA-256 of the serialized bytes.
pub fn legacy_tx_id(raw: &[u8]) -> Hash {
    Hash::new(sha256d(raw))
}

/// Double SHA-256 over `prev_hash || prev_idx (u32 LE) || sha256d(script)`
/// of every input, in order.
pub fn hash_prev_inputs(inputs: &[TxInput]) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(inputs.len() * 68);
    for input in inputs {
        w.write_bytes(&input.prev_hash);
        w.write_u32_le(input.prev_idx);
        w.write_bytes(&sha256d(input.script_sig.to_bytes()));
    }
    sha256d(w.as_bytes())
}

/// Double SHA-256 over the u32 LE sequence of every input, in order.
pub fn hash_sequence(inputs: &[TxInput]) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(inputs.len() * 4);
    for input in inputs {
        w.write_u32_le(input.sequence);
    }
    sha256d(w.as_bytes())
}

/// Commitment to the `OP_PUSHINPUTREF` operands of a locking script.
///
/// The count of references as u32 LE, followed by the double SHA-256 of
/// the references sorted in ascending byte order, or 32 zero bytes when
/// there are none. Encounter order does not affect the result.
///
/// # Returns
/// The 36-byte digest, or a script error if the script is truncated.
pub fn push_refs_digest(pk_script: &[u8]) -> Result<[u8; PUSH_REFS_DIGEST_SIZE], ScriptError> {
    let mut refs = extract_push_input_refs(pk_script)?;
    let mut out = [0u8; PUSH_REFS_DIGEST_SIZE];
    out[..4].copy_from_slice(&(refs.len() as u32).to_le_bytes());
    if !refs.is_empty() {
        refs.sort_unstable();
        out[4..].copy_from_slice(&sha256d(&refs.concat()));
    }
    Ok(out)
}

/// Double SHA-256 over `value (u64 LE) || sha256d(pk_script) ||
/// push_refs_digest(pk_script)` of every output, in order.
///
/// Fails if any locking script is truncated.
pub fn hash_output_hashes(outputs: &[TxOutput]) -> Result<[u8; 32], ScriptError> {
    let mut w = ByteWriter::with_capacity(outputs.len() * 76);
    for output in outputs {
        let script = output.pk_script.to_bytes();
        w.write_u64_le(output.value as u64);
        w.write_bytes(&sha256d(script));
        w.write_bytes(&push_refs_digest(script)?);
    }
    Ok(sha256d(w.as_bytes()))
}

/// Build the version 3 preimage of a transaction.
///
/// The version is written as the u32 bit pattern of the decoded i32, and
/// the counts as i32.
pub fn v3_preimage(tx: &Transaction) -> Result<Vec<u8>, TransactionError> {
    let mut w = ByteWriter::with_capacity(V3_PREIMAGE_SIZE);
    w.write_u32_le(tx.version as u32);
    w.write_i32_le(tx.inputs.len() as i32);
    w.write_bytes(&hash_prev_inputs(&tx.inputs));
    w.write_bytes(&hash_sequence(&tx.inputs));
    w.write_i32_le(tx.outputs.len() as i32);
    w.write_bytes(&hash_output_hashes(&tx.outputs)?);
    w.write_u32_le(tx.locktime);
    Ok(w.into_bytes())
}

/// Version 3 transaction ID: double SHA-256 of [`v3_preimage`].
pub fn v3_tx_id(tx: &Transaction) -> Result<Hash, TransactionError> {
    let preimage = v3_preimage(tx)?;
    let id = Hash::new(sha256d(&preimage));
    trace!("v3 txid: {} pre: {}", hex::encode(id.as_bytes()), hex::encode(&preimage));
    Ok(id)
}

/// Compute the ID of a decoded transaction.
///
/// # Arguments
/// * `tx` - The decoded transaction.
/// * `raw` - The exact bytes `tx` was decoded from; hashed by the legacy
///   scheme and ignored for version 3.
///
/// # Returns
/// The ID in internal byte order. No partial ID is returned when an
/// output script is malformed.
pub fn compute_tx_id(tx: &Transaction, raw: &[u8]) -> Result<Hash, TransactionError> {
    if tx.version == V3_TX_VERSION {
        v3_tx_id(tx)
    } else {
        Ok(legacy_tx_id(raw))
    }
}
