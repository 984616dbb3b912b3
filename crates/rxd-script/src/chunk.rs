//! Script tokenizing and push data encoding.
//!
//! A script operation is either a bare opcode or a data push carrying the
//! opcode byte and the pushed bytes. This module decodes raw script bytes
//! into operations, scans scripts for `OP_PUSHINPUTREF` operands and
//! encodes push data with the correct OP_PUSHDATA prefix.

use rxd_primitives::util::ByteCursor;
use rxd_primitives::PrimitivesError;

use crate::opcodes::*;
use crate::ScriptError;

/// A 36-byte outpoint reference carried by `OP_PUSHINPUTREF`.
pub type PushInputRef = [u8; INPUT_REF_LEN];

/// A single tokenized element of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptOp {
    /// An opcode without an operand, e.g. `OP_DUP`.
    Opcode(u8),
    /// A push opcode together with the bytes it pushes. For direct
    /// pushes (0x01..=0x4b) the opcode is the data length.
    Push { op: u8, data: Vec<u8> },
}

impl ScriptOp {
    /// The opcode byte of this operation.
    pub fn opcode(&self) -> u8 {
        match self {
            ScriptOp::Opcode(op) => *op,
            ScriptOp::Push { op, .. } => *op,
        }
    }

    /// The pushed bytes, if this is a push.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            ScriptOp::Opcode(_) => None,
            ScriptOp::Push { data, .. } => Some(data),
        }
    }

    /// Whether this operation pushes data.
    pub fn is_push(&self) -> bool {
        matches!(self, ScriptOp::Push { .. })
    }

    /// Convert this operation to its ASM representation.
    ///
    /// Plain data pushes render as hex and the empty push as `OP_0`.
    /// Input-reference opcodes keep their name, followed by the hex
    /// operand.
    pub fn to_asm_string(&self) -> String {
        match self {
            ScriptOp::Opcode(op) | ScriptOp::Push { op: op @ OP_0, .. } => opcode_name(*op),
            ScriptOp::Push { op, data } if is_input_ref_opcode(*op) => {
                format!("{} {}", opcode_name(*op), hex::encode(data))
            }
            ScriptOp::Push { data, .. } => hex::encode(data),
        }
    }
}

/// Read the operand length that follows `op`, if `op` takes an operand.
///
/// Consumes the OP_PUSHDATA length field when there is one. The four
/// input-reference opcodes always take exactly 36 bytes with no length
/// field.
fn operand_len(
    cursor: &mut ByteCursor<'_>,
    op: u8,
    offset: usize,
) -> Result<Option<usize>, ScriptError> {
    let truncated = |_: PrimitivesError| ScriptError::Truncated { offset };
    let len = match op {
        OP_PUSHDATA1 => cursor.read_u8().map_err(truncated)? as usize,
        OP_PUSHDATA2 => cursor.read_u16_le().map_err(truncated)? as usize,
        OP_PUSHDATA4 => cursor.read_u32_le().map_err(truncated)? as usize,
        op if op < OP_PUSHDATA1 => op as usize,
        op if is_input_ref_opcode(op) => INPUT_REF_LEN,
        _ => return Ok(None),
    };
    Ok(Some(len))
}

/// Decode raw script bytes into a vector of `ScriptOp` values.
///
/// Single left-to-right pass. OP_0 is a zero-length push. Any push whose
/// length field or payload runs past the end of the script fails the
/// whole decode; no partial result is returned.
///
/// # Arguments
/// * `script` - The raw script bytes to decode.
///
/// # Returns
/// The ordered operations, or `ScriptError::Truncated` naming the offset
/// of the offending opcode.
pub fn tokenize(script: &[u8]) -> Result<Vec<ScriptOp>, ScriptError> {
    let mut ops = Vec::new();
    let mut cursor = ByteCursor::new(script);

    while cursor.remaining() > 0 {
        let offset = cursor.position();
        let op = cursor.read_u8()?;
        match operand_len(&mut cursor, op, offset)? {
            Some(len) => {
                let data = cursor
                    .read_bytes(len)
                    .map_err(|_| ScriptError::Truncated { offset })?;
                ops.push(ScriptOp::Push { op, data: data.to_vec() });
            }
            None => ops.push(ScriptOp::Opcode(op)),
        }
    }

    Ok(ops)
}

/// Collect the operands of every `OP_PUSHINPUTREF` in the script, in the
/// order they appear.
///
/// Uses the same length rules as [`tokenize`]. Operands of the other
/// three input-reference opcodes are skipped, not collected.
///
/// # Arguments
/// * `script` - The raw script bytes to scan.
///
/// # Returns
/// The 36-byte references in encounter order, or `ScriptError::Truncated`.
pub fn extract_push_input_refs(script: &[u8]) -> Result<Vec<PushInputRef>, ScriptError> {
    let mut refs = Vec::new();
    let mut cursor = ByteCursor::new(script);

    while cursor.remaining() > 0 {
        let offset = cursor.position();
        let op = cursor.read_u8()?;
        let Some(len) = operand_len(&mut cursor, op, offset)? else {
            continue;
        };
        if op == OP_PUSHINPUTREF {
            let r: PushInputRef = cursor
                .read_array()
                .map_err(|_| ScriptError::Truncated { offset })?;
            refs.push(r);
        } else {
            cursor
                .read_bytes(len)
                .map_err(|_| ScriptError::Truncated { offset })?;
        }
    }

    Ok(refs)
}

/// Compute the OP_PUSHDATA prefix bytes for a payload of `data_len` bytes.
///
/// Uses the smallest encoding: a direct push below 0x4c, then
/// OP_PUSHDATA1, OP_PUSHDATA2 and OP_PUSHDATA4.
pub fn push_data_prefix(data_len: usize) -> Vec<u8> {
    if data_len < OP_PUSHDATA1 as usize {
        vec![data_len as u8]
    } else if data_len <= 0xff {
        vec![OP_PUSHDATA1, data_len as u8]
    } else if data_len <= 0xffff {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        buf
    } else {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        buf
    }
}

/// Return the script bytes that push `data` onto the stack.
///
/// # Arguments
/// * `data` - The payload to push.
///
/// # Returns
/// The push prefix followed by the payload.
pub fn push_data(data: &[u8]) -> Vec<u8> {
    let mut out = push_data_prefix(data.len());
    out.extend_from_slice(data);
    out
}

/// Render each operation of a script on its own line.
///
/// Bare opcodes show their name; pushes show the opcode name, the hex
/// payload and its length, e.g. `OP_20 89ab... (20 bytes)`.
pub fn dump(script: &[u8]) -> Result<Vec<String>, ScriptError> {
    Ok(tokenize(script)?
        .iter()
        .map(|op| match op {
            ScriptOp::Opcode(op) => opcode_name(*op),
            ScriptOp::Push { op, data } => format!(
                "{} {} ({} bytes)",
                opcode_name(*op),
                hex::encode(data),
                data.len()
            ),
        })
        .collect())
}
