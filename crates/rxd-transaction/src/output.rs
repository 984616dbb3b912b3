//! Transaction output with a value and a locking script.

use rxd_primitives::util::{ByteCursor, ByteWriter};
use rxd_script::Script;

use crate::error::reading;
use crate::TransactionError;

/// A single output in a transaction.
///
/// # Wire format
///
/// | Field      | Size          |
/// |------------|---------------|
/// | value      | 8 bytes (LE)  |
/// | pk_script  | varbytes      |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    /// Amount in the smallest unit (photons).
    pub value: i64,
    /// The locking script.
    pub pk_script: Script,
}

impl TxOutput {
    pub fn new(value: i64, pk_script: Script) -> Self {
        TxOutput { value, pk_script }
    }

    /// Deserialize a `TxOutput` from a `ByteCursor`.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, TransactionError> {
        let value = cursor.read_i64_le().map_err(reading("output value"))?;
        let pk_script = cursor.read_var_bytes().map_err(reading("output pk_script"))?;
        Ok(TxOutput {
            value,
            pk_script: Script::from_bytes(pk_script),
        })
    }

    /// Serialize this output into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_i64_le(self.value);
        writer.write_var_bytes(self.pk_script.to_bytes());
    }
}
