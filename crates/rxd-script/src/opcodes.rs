//! Script opcode constants and the opcode name table.
//!
//! Covers the standard Bitcoin Script opcodes plus the six Radiant
//! additions at 0xce..=0xd3: the SHA-512/256 hash opcodes and the four
//! input-reference opcodes, which carry a fixed 36-byte operand.

/// Declares each opcode constant and records its canonical name in
/// `OPCODE_NAMES`, so the two can never drift apart.
macro_rules! opcodes {
    ($($(#[$meta:meta])* $name:ident = $value:expr;)+) => {
        $(
            $(#[$meta])*
            pub const $name: u8 = $value;
        )+

        const fn build_names() -> [Option<&'static str>; 256] {
            let mut names: [Option<&'static str>; 256] = [None; 256];
            $(
                names[$value as usize] = Some(stringify!($name));
            )+
            names
        }
    };
}

opcodes! {
    /// Push an empty byte vector.
    OP_0 = 0x00;
    /// Next byte is the push length.
    OP_PUSHDATA1 = 0x4c;
    /// Next two bytes (LE) are the push length.
    OP_PUSHDATA2 = 0x4d;
    /// Next four bytes (LE) are the push length.
    OP_PUSHDATA4 = 0x4e;
    OP_1NEGATE = 0x4f;
    OP_RESERVED = 0x50;
    OP_1 = 0x51;
    OP_2 = 0x52;
    OP_3 = 0x53;
    OP_4 = 0x54;
    OP_5 = 0x55;
    OP_6 = 0x56;
    OP_7 = 0x57;
    OP_8 = 0x58;
    OP_9 = 0x59;
    OP_10 = 0x5a;
    OP_11 = 0x5b;
    OP_12 = 0x5c;
    OP_13 = 0x5d;
    OP_14 = 0x5e;
    OP_15 = 0x5f;
    OP_16 = 0x60;

    // Flow control
    OP_NOP = 0x61;
    OP_VER = 0x62;
    OP_IF = 0x63;
    OP_NOTIF = 0x64;
    OP_VERIF = 0x65;
    OP_VERNOTIF = 0x66;
    OP_ELSE = 0x67;
    OP_ENDIF = 0x68;
    OP_VERIFY = 0x69;
    OP_RETURN = 0x6a;

    // Stack
    OP_TOALTSTACK = 0x6b;
    OP_FROMALTSTACK = 0x6c;
    OP_2DROP = 0x6d;
    OP_2DUP = 0x6e;
    OP_3DUP = 0x6f;
    OP_2OVER = 0x70;
    OP_2ROT = 0x71;
    OP_2SWAP = 0x72;
    OP_IFDUP = 0x73;
    OP_DEPTH = 0x74;
    OP_DROP = 0x75;
    OP_DUP = 0x76;
    OP_NIP = 0x77;
    OP_OVER = 0x78;
    OP_PICK = 0x79;
    OP_ROLL = 0x7a;
    OP_ROT = 0x7b;
    OP_SWAP = 0x7c;
    OP_TUCK = 0x7d;

    // Splice and bitwise logic
    OP_CAT = 0x7e;
    OP_SUBSTR = 0x7f;
    OP_LEFT = 0x80;
    OP_RIGHT = 0x81;
    OP_SIZE = 0x82;
    OP_INVERT = 0x83;
    OP_AND = 0x84;
    OP_OR = 0x85;
    OP_XOR = 0x86;
    OP_EQUAL = 0x87;
    OP_EQUALVERIFY = 0x88;
    OP_RESERVED1 = 0x89;
    OP_RESERVED2 = 0x8a;

    // Arithmetic
    OP_1ADD = 0x8b;
    OP_1SUB = 0x8c;
    OP_2MUL = 0x8d;
    OP_2DIV = 0x8e;
    OP_NEGATE = 0x8f;
    OP_ABS = 0x90;
    OP_NOT = 0x91;
    OP_0NOTEQUAL = 0x92;
    OP_ADD = 0x93;
    OP_SUB = 0x94;
    OP_MUL = 0x95;
    OP_DIV = 0x96;
    OP_MOD = 0x97;
    OP_LSHIFT = 0x98;
    OP_RSHIFT = 0x99;
    OP_BOOLAND = 0x9a;
    OP_BOOLOR = 0x9b;
    OP_NUMEQUAL = 0x9c;
    OP_NUMEQUALVERIFY = 0x9d;
    OP_NUMNOTEQUAL = 0x9e;
    OP_LESSTHAN = 0x9f;
    OP_GREATERTHAN = 0xa0;
    OP_LESSTHANOREQUAL = 0xa1;
    OP_GREATERTHANOREQUAL = 0xa2;
    OP_MIN = 0xa3;
    OP_MAX = 0xa4;
    OP_WITHIN = 0xa5;

    // Crypto
    OP_RIPEMD160 = 0xa6;
    OP_SHA1 = 0xa7;
    OP_SHA256 = 0xa8;
    OP_HASH160 = 0xa9;
    OP_HASH256 = 0xaa;
    OP_CODESEPARATOR = 0xab;
    OP_CHECKSIG = 0xac;
    OP_CHECKSIGVERIFY = 0xad;
    OP_CHECKMULTISIG = 0xae;
    OP_CHECKMULTISIGVERIFY = 0xaf;

    // Locktime
    OP_NOP1 = 0xb0;
    OP_CHECKLOCKTIMEVERIFY = 0xb1;
    OP_CHECKSEQUENCEVERIFY = 0xb2;

    // Radiant
    /// Single SHA-512/256 of the top stack item.
    OP_SHA512_256 = 0xce;
    /// Double SHA-512/256 of the top stack item.
    OP_HASH512_256 = 0xcf;
    /// Push a 36-byte outpoint reference; collected into the v3 txid.
    OP_PUSHINPUTREF = 0xd0;
    OP_REQUIREINPUTREF = 0xd1;
    OP_DISALLOWPUSHINPUTREF = 0xd2;
    OP_DISALLOWPUSHINPUTREFSIBLING = 0xd3;
}

/// Alias for `OP_0`.
pub const OP_FALSE: u8 = OP_0;
/// Alias for `OP_1`.
pub const OP_TRUE: u8 = OP_1;

/// Operand length of every input-reference opcode.
pub const INPUT_REF_LEN: usize = 36;

static OPCODE_NAMES: [Option<&str>; 256] = build_names();

/// Whether `op` is one of the four input-reference opcodes
/// (`OP_PUSHINPUTREF` ..= `OP_DISALLOWPUSHINPUTREFSIBLING`).
pub fn is_input_ref_opcode(op: u8) -> bool {
    (OP_PUSHINPUTREF..=OP_DISALLOWPUSHINPUTREFSIBLING).contains(&op)
}

/// Return the canonical name of an opcode.
///
/// Direct pushes (0x01..=0x4b) render as `OP_<n>` with `n` the push
/// length, and unassigned byte values as `OP_UNKNOWN:<n>`.
///
/// # Arguments
/// * `op` - The opcode byte.
///
/// # Returns
/// The display name of the opcode.
pub fn opcode_name(op: u8) -> String {
    if op > OP_0 && op < OP_PUSHDATA1 {
        return format!("OP_{}", op);
    }
    match OPCODE_NAMES[op as usize] {
        Some(name) => name.to_string(),
        None => format!("OP_UNKNOWN:{}", op),
    }
}

/// Look up an opcode byte by its canonical name.
pub fn opcode_from_name(name: &str) -> Option<u8> {
    match name {
        "OP_FALSE" => return Some(OP_FALSE),
        "OP_TRUE" => return Some(OP_TRUE),
        _ => {}
    }
    OPCODE_NAMES
        .iter()
        .position(|n| *n == Some(name))
        .map(|i| i as u8)
}
