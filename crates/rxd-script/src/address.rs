/// Base58Check address handling.
///
/// Converts P2PKH and P2SH addresses into the locking scripts that pay
/// to them, and hash160 values back into addresses. The version prefixes
/// are per network and come from `AddressParams`.

use rxd_primitives::base58;

use crate::script::Script;
use crate::ScriptError;

/// Length of the hash160 carried by an address.
const HASH160_LEN: usize = 20;

/// Address version prefixes of one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressParams {
    /// Version prefix of pay-to-public-key-hash addresses.
    pub p2pkh_verbyte: &'static [u8],
    /// Accepted version prefixes of pay-to-script-hash addresses.
    pub p2sh_verbytes: &'static [&'static [u8]],
}

impl AddressParams {
    /// Radiant mainnet: P2PKH `00`, P2SH `05`.
    pub const MAINNET: AddressParams = AddressParams {
        p2pkh_verbyte: &[0x00],
        p2sh_verbytes: &[&[0x05]],
    };

    /// Radiant test networks: P2PKH `6f`, P2SH `c4`.
    pub const TESTNET: AddressParams = AddressParams {
        p2pkh_verbyte: &[0x6f],
        p2sh_verbytes: &[&[0xc4]],
    };
}

/// Return the locking script that pays to a Base58Check address.
///
/// The decoded payload is a version prefix followed by a 20-byte hash160.
/// A P2PKH prefix yields `OP_DUP OP_HASH160 <hash160> OP_EQUALVERIFY
/// OP_CHECKSIG`; any P2SH prefix yields `OP_HASH160 <hash160> OP_EQUAL`.
///
/// # Arguments
/// * `address` - The Base58Check address string.
/// * `params` - Version prefixes of the network.
///
/// # Returns
/// The locking script, a Base58 or checksum error, or
/// `UnknownAddressVersion` when the prefix is missing or not recognised.
pub fn pay_to_address_script(address: &str, params: &AddressParams) -> Result<Script, ScriptError> {
    let raw = base58::check_decode(address)?;
    if raw.len() <= HASH160_LEN {
        return Err(ScriptError::UnknownAddressVersion(address.to_string()));
    }
    let (verbyte, hash) = raw.split_at(raw.len() - HASH160_LEN);
    let mut hash160 = [0u8; HASH160_LEN];
    hash160.copy_from_slice(hash);

    if verbyte == params.p2pkh_verbyte {
        return Ok(Script::p2pkh(&hash160));
    }
    if params.p2sh_verbytes.iter().any(|v| *v == verbyte) {
        return Ok(Script::p2sh(&hash160));
    }
    Err(ScriptError::UnknownAddressVersion(address.to_string()))
}

/// Encode a hash160 with a version prefix as a Base58Check address.
///
/// # Arguments
/// * `hash160` - The 20-byte hash.
/// * `verbyte` - Version prefix, e.g. `AddressParams::MAINNET.p2pkh_verbyte`.
pub fn hash160_to_address(hash160: &[u8], verbyte: &[u8]) -> Result<String, ScriptError> {
    if hash160.len() != HASH160_LEN {
        return Err(ScriptError::InvalidAddressLength(hex::encode(hash160)));
    }
    let mut payload = Vec::with_capacity(verbyte.len() + HASH160_LEN);
    payload.extend_from_slice(verbyte);
    payload.extend_from_slice(hash160);
    Ok(base58::check_encode(&payload))
}
