/// Radiant Script type - a sequence of opcodes and data pushes.
///
/// Scripts are used in transaction inputs (unlocking) and outputs (locking)
/// to define spending conditions. The Script wraps a `Vec<u8>` and provides
/// methods for construction, template matching, serialization, and ASM output.

use std::fmt;

use crate::chunk::{extract_push_input_refs, push_data, tokenize, PushInputRef, ScriptOp};
use crate::opcodes::*;
use crate::ScriptError;

/// Element of an output template: a specific opcode, or any data push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pattern {
    Op(u8),
    AnyPush,
}

const P2PKH_PATTERN: [Pattern; 5] = [
    Pattern::Op(OP_DUP),
    Pattern::Op(OP_HASH160),
    Pattern::AnyPush,
    Pattern::Op(OP_EQUALVERIFY),
    Pattern::Op(OP_CHECKSIG),
];
const P2SH_PATTERN: [Pattern; 3] = [
    Pattern::Op(OP_HASH160),
    Pattern::AnyPush,
    Pattern::Op(OP_EQUAL),
];
const P2PK_PATTERN: [Pattern; 2] = [Pattern::AnyPush, Pattern::Op(OP_CHECKSIG)];

fn match_ops(ops: &[ScriptOp], pattern: &[Pattern]) -> bool {
    ops.len() == pattern.len()
        && ops.iter().zip(pattern).all(|(op, pat)| match (op, pat) {
            (ScriptOp::Push { .. }, Pattern::AnyPush) => true,
            (ScriptOp::Opcode(op), Pattern::Op(want)) => op == want,
            _ => false,
        })
}

/// Whether an output script was unspendable before the Genesis upgrade:
/// it starts with `OP_RETURN` or `OP_FALSE OP_RETURN`.
pub fn is_unspendable_legacy(script: &[u8]) -> bool {
    script.starts_with(&[OP_FALSE, OP_RETURN]) || script.first() == Some(&OP_RETURN)
}

/// Whether an output script is provably unspendable after Genesis:
/// it starts with `OP_FALSE OP_RETURN`.
pub fn is_unspendable_genesis(script: &[u8]) -> bool {
    script.starts_with(&[OP_FALSE, OP_RETURN])
}

/// A Radiant script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from an ASM string.
    ///
    /// Known opcode names are emitted directly and other tokens are
    /// treated as hex push data. An input-reference opcode must be
    /// followed by its 36-byte operand as a hex token.
    ///
    /// # Arguments
    /// * `asm` - A space-separated ASM string.
    ///
    /// # Returns
    /// A `Script`, or an error if any token is invalid.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut script = Script::new();
        let mut tokens = asm.split_whitespace();
        while let Some(token) = tokens.next() {
            match opcode_from_name(token) {
                Some(op) if is_input_ref_opcode(op) => {
                    let operand = tokens
                        .next()
                        .ok_or_else(|| ScriptError::InvalidAsm(token.to_string()))?;
                    let data = hex::decode(operand)?;
                    if data.len() != INPUT_REF_LEN {
                        return Err(ScriptError::InvalidAsm(operand.to_string()));
                    }
                    script.0.push(op);
                    script.0.extend_from_slice(&data);
                }
                Some(op) => script.append_opcodes(&[op])?,
                None => {
                    let data = hex::decode(token)
                        .map_err(|_| ScriptError::InvalidAsm(token.to_string()))?;
                    script.append_push_data(&data);
                }
            }
        }
        Ok(script)
    }

    /// Build a pay-to-public-key-hash locking script:
    /// `OP_DUP OP_HASH160 <hash160> OP_EQUALVERIFY OP_CHECKSIG`.
    pub fn p2pkh(hash160: &[u8; 20]) -> Self {
        let mut b = vec![OP_DUP, OP_HASH160];
        b.extend_from_slice(&push_data(hash160));
        b.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        Script(b)
    }

    /// Build a pay-to-script-hash locking script:
    /// `OP_HASH160 <hash160> OP_EQUAL`.
    pub fn p2sh(hash160: &[u8; 20]) -> Self {
        let mut b = vec![OP_HASH160];
        b.extend_from_slice(&push_data(hash160));
        b.push(OP_EQUAL);
        Script(b)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Convert the script to its ASM (human-readable assembly) representation.
    ///
    /// Each operation is a space-separated token: data pushes appear as
    /// their hex encoding, opcodes by name.
    ///
    /// # Returns
    /// The ASM string, or an error if the script is truncated.
    pub fn to_asm(&self) -> Result<String, ScriptError> {
        let parts: Vec<String> = self.ops()?.iter().map(ScriptOp::to_asm_string).collect();
        Ok(parts.join(" "))
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the script and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Return the length of the script in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the script is empty (zero bytes).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Script classification
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key-Hash (P2PKH) output script.
    ///
    /// Pattern: OP_DUP OP_HASH160 <push> OP_EQUALVERIFY OP_CHECKSIG
    pub fn is_p2pkh(&self) -> bool {
        self.matches(&P2PKH_PATTERN)
    }

    /// Check if this is a Pay-to-Script-Hash (P2SH) output script.
    ///
    /// Pattern: OP_HASH160 <push> OP_EQUAL
    pub fn is_p2sh(&self) -> bool {
        self.matches(&P2SH_PATTERN)
    }

    /// Check if this is a Pay-to-Public-Key (P2PK) output script.
    ///
    /// Pattern: <push> OP_CHECKSIG
    pub fn is_p2pk(&self) -> bool {
        self.matches(&P2PK_PATTERN)
    }

    /// See [`is_unspendable_legacy`].
    pub fn is_unspendable_legacy(&self) -> bool {
        is_unspendable_legacy(&self.0)
    }

    /// See [`is_unspendable_genesis`].
    pub fn is_unspendable_genesis(&self) -> bool {
        is_unspendable_genesis(&self.0)
    }

    fn matches(&self, pattern: &[Pattern]) -> bool {
        self.ops().map(|ops| match_ops(&ops, pattern)).unwrap_or(false)
    }

    // -----------------------------------------------------------------------
    // Data extraction
    // -----------------------------------------------------------------------

    /// Return the hash160 pushed by a P2PKH or P2SH script.
    pub fn hash160(&self) -> Option<[u8; 20]> {
        let ops = self.ops().ok()?;
        let push = if match_ops(&ops, &P2PKH_PATTERN) || match_ops(&ops, &P2SH_PATTERN) {
            ops.iter().find_map(ScriptOp::data)?
        } else {
            return None;
        };
        push.try_into().ok()
    }

    /// Tokenize the script into its operations.
    pub fn ops(&self) -> Result<Vec<ScriptOp>, ScriptError> {
        tokenize(&self.0)
    }

    /// The `OP_PUSHINPUTREF` operands of this script in encounter order.
    pub fn push_input_refs(&self) -> Result<Vec<PushInputRef>, ScriptError> {
        extract_push_input_refs(&self.0)
    }

    // -----------------------------------------------------------------------
    // Mutation / building
    // -----------------------------------------------------------------------

    /// Append data bytes to the script with the minimal push prefix.
    pub fn append_push_data(&mut self, data: &[u8]) {
        self.0.extend_from_slice(&push_data(data));
    }

    /// Append raw opcodes to the script.
    ///
    /// Rejects opcodes that take an operand (direct pushes, OP_PUSHDATA
    /// and the input-reference opcodes). Use `append_push_data` for data.
    pub fn append_opcodes(&mut self, opcodes: &[u8]) -> Result<(), ScriptError> {
        for &op in opcodes {
            if (op > OP_0 && op <= OP_PUSHDATA4) || is_input_ref_opcode(op) {
                return Err(ScriptError::InvalidOpcodeType(opcode_name(op)));
            }
        }
        self.0.extend_from_slice(opcodes);
        Ok(())
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P2PKH_HEX: &str = "76a914e2a623699e81b291c0327f408fea765d534baa2a88ac";
    const P2SH_HEX: &str = "a914e2a623699e81b291c0327f408fea765d534baa2a87";

    // -----------------------------------------------------------------------
    // Construction & roundtrip tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_from_hex_roundtrip() {
        let script = Script::from_hex(P2PKH_HEX).expect("valid hex should parse");
        assert_eq!(script.to_hex(), P2PKH_HEX);
        assert_eq!(script.len(), 25);
    }

    #[test]
    fn test_from_hex_empty() {
        let script = Script::from_hex("").expect("empty hex should parse");
        assert!(script.is_empty());
        assert_eq!(script.to_hex(), "");
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(Script::from_hex("ZZZZ"), Err(ScriptError::InvalidHex(_))));
    }

    #[test]
    fn test_to_asm_p2pkh() {
        let script = Script::from_hex(P2PKH_HEX).unwrap();
        assert_eq!(
            script.to_asm().unwrap(),
            "OP_DUP OP_HASH160 e2a623699e81b291c0327f408fea765d534baa2a OP_EQUALVERIFY OP_CHECKSIG"
        );
    }

    #[test]
    fn test_to_asm_empty_and_truncated() {
        assert_eq!(Script::new().to_asm().unwrap(), "");
        assert!(Script::from_bytes(&[0x4c, 0x09, 0x00]).to_asm().unwrap_err().is_truncated());
    }

    #[test]
    fn test_from_asm_p2pkh() {
        let asm = "OP_DUP OP_HASH160 e2a623699e81b291c0327f408fea765d534baa2a OP_EQUALVERIFY OP_CHECKSIG";
        let script = Script::from_asm(asm).expect("valid ASM should parse");
        assert_eq!(script.to_hex(), P2PKH_HEX);
    }

    #[test]
    fn test_asm_roundtrip_with_input_ref() {
        let mut bytes = vec![OP_PUSHINPUTREF];
        bytes.extend_from_slice(&[0x42; 36]);
        bytes.extend_from_slice(&[OP_DROP, OP_0, OP_RETURN]);
        let script = Script::from_bytes(&bytes);
        let asm = script.to_asm().unwrap();
        assert_eq!(
            asm,
            format!("OP_PUSHINPUTREF {} OP_DROP OP_0 OP_RETURN", "42".repeat(36))
        );
        assert_eq!(Script::from_asm(&asm).unwrap(), script);
    }

    #[test]
    fn test_from_asm_rejects_bad_tokens() {
        assert!(matches!(Script::from_asm("OP_DUP xyz"), Err(ScriptError::InvalidAsm(_))));
        assert!(Script::from_asm("OP_PUSHINPUTREF").is_err());
        assert!(Script::from_asm("OP_PUSHINPUTREF abcd").is_err());
        assert!(Script::from_asm("OP_PUSHDATA1").is_err());
    }

    // -----------------------------------------------------------------------
    // Templates and classification
    // -----------------------------------------------------------------------

    #[test]
    fn test_p2pkh_builder() {
        let hash: [u8; 20] = hex::decode("e2a623699e81b291c0327f408fea765d534baa2a")
            .unwrap()
            .try_into()
            .unwrap();
        let script = Script::p2pkh(&hash);
        assert_eq!(script.to_hex(), P2PKH_HEX);
        assert!(script.is_p2pkh());
        assert!(!script.is_p2sh());
        assert_eq!(script.hash160(), Some(hash));
    }

    #[test]
    fn test_p2sh_builder() {
        let hash = [0xe2u8; 20];
        let script = Script::p2sh(&hash);
        assert_eq!(script.len(), 23);
        assert!(script.is_p2sh());
        assert!(!script.is_p2pkh());
        assert_eq!(script.hash160(), Some(hash));
        assert!(Script::from_hex(P2SH_HEX).unwrap().is_p2sh());
    }

    #[test]
    fn test_is_p2pk() {
        let script = Script::from_hex(
            "2102f0d97c290e79bf2a8660c406aa56b6f189ff79f2245cc5aff82808b58131b4d5ac",
        )
        .unwrap();
        assert!(script.is_p2pk());
        assert!(!script.is_p2pkh());
        assert!(!Script::from_hex(P2PKH_HEX).unwrap().is_p2pk());
        assert_eq!(script.hash160(), None);
    }

    /// Matching is on tokenized operations, so the hash push may have
    /// any length.
    #[test]
    fn test_p2pkh_matches_any_push() {
        let script = Script::from_hex("76a90301020388ac").unwrap();
        assert!(script.is_p2pkh());
        assert_eq!(script.hash160(), None);
    }

    #[test]
    fn test_truncated_script_matches_nothing() {
        let script = Script::from_hex("76a91401").unwrap();
        assert!(!script.is_p2pkh());
        assert!(!script.is_p2sh());
        assert!(!script.is_p2pk());
    }

    #[test]
    fn test_unspendable() {
        let op_return = Script::from_hex("6a0568656c6c6f").unwrap();
        let false_return = Script::from_hex("006a0568656c6c6f").unwrap();
        let p2pkh = Script::from_hex(P2PKH_HEX).unwrap();

        assert!(op_return.is_unspendable_legacy());
        assert!(!op_return.is_unspendable_genesis());
        assert!(false_return.is_unspendable_legacy());
        assert!(false_return.is_unspendable_genesis());
        assert!(!p2pkh.is_unspendable_legacy());
        assert!(!p2pkh.is_unspendable_genesis());
        assert!(!is_unspendable_legacy(&[]));
        assert!(!is_unspendable_genesis(&[OP_FALSE]));
    }

    #[test]
    fn test_push_input_refs() {
        let mut bytes = vec![OP_PUSHINPUTREF];
        bytes.extend_from_slice(&[7u8; 36]);
        bytes.extend_from_slice(&hex::decode(P2PKH_HEX).unwrap());
        let script = Script::from(bytes);
        assert_eq!(script.push_input_refs().unwrap(), vec![[7u8; 36]]);
        assert!(!script.is_p2pkh());
    }

    // -----------------------------------------------------------------------
    // Append operations
    // -----------------------------------------------------------------------

    #[test]
    fn test_append_push_data() {
        let mut script = Script::new();
        script.append_push_data(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(script.to_hex(), "050102030405");

        let mut script = Script::new();
        script.append_push_data(&[0xaa; 80]);
        let hex_str = script.to_hex();
        assert_eq!(&hex_str[..4], "4c50");
        assert_eq!(hex_str.len(), 4 + 80 * 2);
    }

    #[test]
    fn test_append_opcodes() {
        let mut script = Script::from_asm("OP_2 OP_2 OP_ADD").expect("valid ASM");
        script.append_opcodes(&[OP_EQUAL, OP_VERIFY]).expect("should succeed");
        assert_eq!(script.to_asm().unwrap(), "OP_2 OP_2 OP_ADD OP_EQUAL OP_VERIFY");
        assert!(script.append_opcodes(&[OP_PUSHDATA1]).is_err());
        assert!(script.append_opcodes(&[OP_REQUIREINPUTREF]).is_err());
    }

    // -----------------------------------------------------------------------
    // Serialization (JSON) and formatting
    // -----------------------------------------------------------------------

    #[test]
    fn test_serde_roundtrip() {
        let script = Script::from_asm("OP_2 OP_2 OP_ADD OP_4 OP_EQUALVERIFY").expect("valid ASM");
        let json_str = serde_json::to_string(&script).expect("should serialize");
        assert_eq!(json_str, r#""5252935488""#);
        let back: Script = serde_json::from_str(&json_str).expect("should deserialize");
        assert_eq!(back, script);
        assert!(serde_json::from_str::<Script>(r#""zz""#).is_err());
    }

    #[test]
    fn test_display_and_debug() {
        let script = Script::from_hex(P2PKH_HEX).unwrap();
        assert_eq!(format!("{}", script), P2PKH_HEX);
        assert_eq!(format!("{:?}", script), format!("Script({})", P2PKH_HEX));
    }
}
