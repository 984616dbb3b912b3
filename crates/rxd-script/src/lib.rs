/// Radiant script handling.
///
/// Provides the opcode table including the Radiant input-reference
/// opcodes, the script tokenizer and push-reference scan, the Script type
/// with its output templates, and address-to-script conversion.

pub mod script;
pub mod opcodes;
pub mod chunk;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::AddressParams;
pub use chunk::{PushInputRef, ScriptOp};
