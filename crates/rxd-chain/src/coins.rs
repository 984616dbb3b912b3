//! Coin parameter table.
//!
//! Each supported (coin, network) pair is a plain `CoinParams` value in a
//! static table. Callers look one up by name and network and pass it to
//! whatever needs chain-specific constants: address version prefixes,
//! the genesis hash, ports and block fetch sizes.

use log::debug;
use rxd_primitives::chainhash::{hash_to_hex_str, Hash};
use rxd_primitives::hash::{sha256, HASHX_LEN};
use rxd_script::address::pay_to_address_script;
use rxd_script::{AddressParams, Script};
use rxd_transaction::block::{header_hash, header_prev_hash, HEADER_SIZE};
use rxd_transaction::Block;

use crate::network::Network;
use crate::ChainError;

/// Index key of a script: the first 11 bytes of its SHA-256.
pub type HashX = [u8; HASHX_LEN];

/// Fractional digits rendered by `decimal_value` before giving up on a
/// non-terminating expansion.
const MAX_DECIMAL_PLACES: usize = 20;

/// Default TCP and SSL ports of the peer protocol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerPorts {
    pub tcp: u16,
    pub ssl: u16,
}

/// How many blocks to request at once while syncing.
///
/// Below `initial_until` the chain is assumed sparse and `initial` blocks
/// are fetched per request; from that height on, `steady`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchPolicy {
    pub initial_until: u64,
    pub initial: usize,
    pub steady: usize,
}

impl FetchPolicy {
    pub const DEFAULT: FetchPolicy = FetchPolicy {
        initial_until: 130_000,
        initial: 1000,
        steady: 100,
    };

    pub fn max_fetch_blocks(&self, height: u64) -> usize {
        if height < self.initial_until {
            self.initial
        } else {
            self.steady
        }
    }
}

/// Constants of one coin on one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinParams {
    pub name: &'static str,
    pub short_name: &'static str,
    pub net: Network,
    /// Smallest units per whole coin.
    pub value_per_coin: u64,
    pub address: AddressParams,
    /// Hash of the genesis block header, display hex.
    pub genesis_hash: &'static str,
    pub rpc_port: u16,
    pub reorg_limit: u32,
    pub peer_ports: PeerPorts,
    /// Transaction count estimate at `tx_count_height`, used for sync
    /// progress reporting together with `tx_per_block`.
    pub tx_count: u64,
    pub tx_count_height: u64,
    pub tx_per_block: u64,
    pub fetch: FetchPolicy,
}

const VALUE_PER_COIN: u64 = 100_000_000;

const TESTNET_GENESIS_HASH: &str = "000000002008a2f4a76b850a838ae084994c200dc2fd354f73102298fe063a91";
const TESTNET_PEER_PORTS: PeerPorts = PeerPorts { tcp: 51001, ssl: 51002 };
const TESTNET_REORG_LIMIT: u32 = 8000;

pub const RADIANT_MAINNET: CoinParams = CoinParams {
    name: "Radiant",
    short_name: "RXD",
    net: Network::Mainnet,
    value_per_coin: VALUE_PER_COIN,
    address: AddressParams::MAINNET,
    genesis_hash: "0000000065d8ed5d8be28d6876b3ffb660ac2a6c0ca59e437e1f7a6f4e003fb4",
    rpc_port: 7332,
    reorg_limit: 200,
    peer_ports: PeerPorts { tcp: 50001, ssl: 50002 },
    tx_count: 1000,
    tx_count_height: 2000,
    tx_per_block: 10,
    fetch: FetchPolicy::DEFAULT,
};

pub const RADIANT_TESTNET: CoinParams = CoinParams {
    name: "RadiantTestnet",
    short_name: "XTN",
    net: Network::Testnet,
    value_per_coin: VALUE_PER_COIN,
    address: AddressParams::TESTNET,
    genesis_hash: TESTNET_GENESIS_HASH,
    rpc_port: 17332,
    reorg_limit: TESTNET_REORG_LIMIT,
    peer_ports: TESTNET_PEER_PORTS,
    tx_count: 1,
    tx_count_height: 1,
    tx_per_block: 21,
    fetch: FetchPolicy::DEFAULT,
};

pub const RADIANT_TESTNET4: CoinParams = CoinParams {
    name: "RadiantTestnet4",
    genesis_hash: "000000000d8ada264d16f87a590b2af320cd3c7e3f9be5482163e830fd00aca2",
    rpc_port: 27332,
    ..RADIANT_TESTNET
};

pub const RADIANT_SCALING_TESTNET: CoinParams = CoinParams {
    net: Network::ScalingTest,
    genesis_hash: "00000000ea7340a6e9ae28ad8ca95a652c8da00ee7ea97e6cb42cd1558884c87",
    rpc_port: 37332,
    tx_count: 1000,
    tx_count_height: 1000,
    tx_per_block: 5000,
    fetch: FetchPolicy {
        initial_until: 11,
        initial: 100,
        steady: 3,
    },
    ..RADIANT_TESTNET
};

pub const RADIANT_REGTEST: CoinParams = CoinParams {
    net: Network::Regtest,
    rpc_port: 17443,
    ..RADIANT_TESTNET
};

/// Every supported (coin, network) pair.
pub static COINS: [CoinParams; 5] = [
    RADIANT_MAINNET,
    RADIANT_TESTNET,
    RADIANT_TESTNET4,
    RADIANT_SCALING_TESTNET,
    RADIANT_REGTEST,
];

/// Find the parameters for a coin name and network name, ignoring case.
///
/// # Returns
/// The table entry, or `UnknownCoin` if the pair is not configured.
pub fn lookup_coin(name: &str, net: &str) -> Result<&'static CoinParams, ChainError> {
    let coin = COINS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name) && c.net.as_str().eq_ignore_ascii_case(net))
        .ok_or_else(|| ChainError::UnknownCoin {
            name: name.to_string(),
            net: net.to_string(),
        })?;
    debug!("using coin {} on {}", coin.name, coin.net);
    Ok(coin)
}

/// Index key of a script: `sha256(script)` truncated to 11 bytes.
pub fn hashx_from_script(script: &[u8]) -> HashX {
    let mut hashx = [0u8; HASHX_LEN];
    hashx.copy_from_slice(&sha256(script)[..HASHX_LEN]);
    hashx
}

impl CoinParams {
    pub fn hashx_from_script(&self, script: &[u8]) -> HashX {
        hashx_from_script(script)
    }

    /// Locking script paying to a Base58Check address of this network.
    pub fn pay_to_address_script(&self, address: &str) -> Result<Script, ChainError> {
        Ok(pay_to_address_script(address, &self.address)?)
    }

    /// hashX of the locking script paying to `address`.
    pub fn address_to_hashx(&self, address: &str) -> Result<HashX, ChainError> {
        let script = self.pay_to_address_script(address)?;
        Ok(hashx_from_script(script.to_bytes()))
    }

    pub fn hash160_to_p2pkh_script(&self, hash160: &[u8; 20]) -> Script {
        Script::p2pkh(hash160)
    }

    pub fn hash160_to_p2pkh_hashx(&self, hash160: &[u8; 20]) -> HashX {
        hashx_from_script(self.hash160_to_p2pkh_script(hash160).to_bytes())
    }

    /// Block hash of a header: double SHA-512/256.
    pub fn header_hash(&self, header: &[u8]) -> Hash {
        header_hash(header)
    }

    /// Previous block hash stored in a header, or `None` if the header is
    /// shorter than 36 bytes.
    pub fn header_prevhash(&self, header: &[u8]) -> Option<Hash> {
        header_prev_hash(header)
    }

    /// Check that a raw block is this network's genesis block.
    ///
    /// The genesis coinbase is unspendable, so only the header followed
    /// by a zero transaction count is returned for indexing.
    ///
    /// # Returns
    /// `header || 0x00`, or `GenesisMismatch` naming both hashes.
    pub fn genesis_block(&self, raw: &[u8]) -> Result<Vec<u8>, ChainError> {
        let header = &raw[..raw.len().min(HEADER_SIZE)];
        let got = hash_to_hex_str(self.header_hash(header).as_bytes());
        if got != self.genesis_hash {
            return Err(ChainError::GenesisMismatch {
                got,
                expected: self.genesis_hash.to_string(),
            });
        }
        let mut block = Vec::with_capacity(header.len() + 1);
        block.extend_from_slice(header);
        block.push(0);
        Ok(block)
    }

    /// Decode a raw block into its header and (transaction, ID) pairs.
    pub fn block(&self, raw: Vec<u8>) -> Result<Block, ChainError> {
        Ok(Block::from_bytes(raw)?)
    }

    /// Exact decimal rendering of `value` smallest units in whole coins,
    /// without trailing zeros, e.g. `150000000` -> `"1.5"`.
    pub fn decimal_value(&self, value: i64) -> String {
        format_decimal(value, self.value_per_coin)
    }

    pub fn max_fetch_blocks(&self, height: u64) -> usize {
        self.fetch.max_fetch_blocks(height)
    }
}

fn format_decimal(value: i64, per_coin: u64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let per_coin = u128::from(per_coin.max(1));
    let magnitude = u128::from(value.unsigned_abs());
    let whole = magnitude / per_coin;
    let mut rem = magnitude % per_coin;
    if rem == 0 {
        return format!("{}{}", sign, whole);
    }

    let mut frac = String::new();
    while rem != 0 && frac.len() < MAX_DECIMAL_PLACES {
        rem *= 10;
        frac.push(char::from(b'0' + (rem / per_coin) as u8));
        rem %= per_coin;
    }
    format!("{}{}.{}", sign, whole, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKH: [u8; 20] = [
        0x8f, 0xe8, 0x0c, 0x75, 0xc9, 0x56, 0x0e, 0x8b, 0x56, 0xed, 0x64, 0xea, 0x3c, 0x26, 0xe1, 0x8d,
        0x2c, 0x52, 0x21, 0x1b,
    ];
    const MAINNET_ADDR: &str = "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr";
    const MAINNET_P2SH_ADDR: &str = "3EovXzwwyMu5J9C9Wod2nSCxyFMCpw6BkA";
    const TESTNET_ADDR: &str = "mtdruWYVEV1wz5yL7GvpBj4MgifCB7yhPd";

    #[test]
    fn test_lookup_coin() {
        let coin = lookup_coin("radiant", "MAINNET").unwrap();
        assert_eq!(coin.short_name, "RXD");
        assert_eq!(coin.rpc_port, 7332);
        assert_eq!(coin.tx_per_block, 10);

        assert_eq!(lookup_coin("RadiantTestnet", "testnet").unwrap().rpc_port, 17332);
        assert_eq!(lookup_coin("RadiantTestnet4", "testnet").unwrap().rpc_port, 27332);
        assert_eq!(lookup_coin("RadiantTestnet", "scalingtest").unwrap().rpc_port, 37332);
        assert_eq!(lookup_coin("RadiantTestnet", "regtest").unwrap().rpc_port, 17443);
    }

    #[test]
    fn test_lookup_unknown_coin() {
        assert!(matches!(
            lookup_coin("Radiant", "regtest"),
            Err(ChainError::UnknownCoin { name, net }) if name == "Radiant" && net == "regtest"
        ));
        assert!(lookup_coin("Bitcoin", "mainnet").is_err());
    }

    #[test]
    fn test_table_entries_are_unique() {
        for (i, a) in COINS.iter().enumerate() {
            for b in &COINS[i + 1..] {
                assert!(!(a.name == b.name && a.net == b.net), "duplicate {} {}", a.name, a.net);
            }
            assert_eq!(a.value_per_coin, 100_000_000);
            assert_eq!(a.genesis_hash.len(), 64);
        }
    }

    #[test]
    fn test_testnet_variants_share_testnet_constants() {
        for coin in &COINS[1..] {
            assert_eq!(coin.short_name, "XTN");
            assert_eq!(coin.address, AddressParams::TESTNET);
            assert_eq!(coin.reorg_limit, 8000);
            assert_eq!(coin.peer_ports, PeerPorts { tcp: 51001, ssl: 51002 });
        }
        assert_eq!(RADIANT_REGTEST.genesis_hash, RADIANT_TESTNET.genesis_hash);
        assert_eq!(RADIANT_REGTEST.tx_per_block, 21);
    }

    #[test]
    fn test_hashx() {
        let script = RADIANT_MAINNET.hash160_to_p2pkh_script(&PKH);
        assert_eq!(hex::encode(hashx_from_script(script.to_bytes())), "848890c240799cd83be7d3");
        assert_eq!(hex::encode(hashx_from_script(&[])), "e3b0c44298fc1c149afbf4");
        assert_eq!(
            RADIANT_MAINNET.hash160_to_p2pkh_hashx(&PKH),
            RADIANT_MAINNET.hashx_from_script(script.to_bytes())
        );
    }

    #[test]
    fn test_address_to_hashx() {
        assert_eq!(
            hex::encode(RADIANT_MAINNET.address_to_hashx(MAINNET_ADDR).unwrap()),
            "848890c240799cd83be7d3"
        );
        assert_eq!(
            hex::encode(RADIANT_MAINNET.address_to_hashx(MAINNET_P2SH_ADDR).unwrap()),
            "81451489501f973eed1357"
        );
        // Same hash160 on the test network gives the same script.
        assert_eq!(
            RADIANT_TESTNET.address_to_hashx(TESTNET_ADDR).unwrap(),
            RADIANT_MAINNET.address_to_hashx(MAINNET_ADDR).unwrap()
        );
    }

    #[test]
    fn test_pay_to_address_wrong_network() {
        let err = RADIANT_TESTNET.pay_to_address_script(MAINNET_ADDR).unwrap_err();
        assert!(matches!(
            err,
            ChainError::Script(rxd_script::ScriptError::UnknownAddressVersion(_))
        ));
        assert!(!err.is_truncated());
    }

    #[test]
    fn test_header_prevhash() {
        let mut header = [0u8; HEADER_SIZE];
        header[4..36].copy_from_slice(&[0x77; 32]);
        assert_eq!(RADIANT_MAINNET.header_prevhash(&header), Some(Hash::new([0x77; 32])));
        assert_eq!(RADIANT_MAINNET.header_prevhash(&header[..20]), None);
    }

    const BITCOIN_GENESIS_HEADER: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c";
    /// Double SHA-512/256 of the header above, display hex.
    const BITCOIN_GENESIS_HASH: &str = "7dbbe04ba48f955645dfe6cc59c36ce287fc182062f405612d5618ecc560e824";

    fn header_only_coin() -> CoinParams {
        CoinParams {
            genesis_hash: BITCOIN_GENESIS_HASH,
            ..RADIANT_REGTEST
        }
    }

    #[test]
    fn test_genesis_block() {
        let mut raw = hex::decode(BITCOIN_GENESIS_HEADER).unwrap();
        raw.extend_from_slice(&[0x01, 0xaa, 0xbb]);

        let coin = header_only_coin();
        assert_eq!(coin.header_hash(&raw[..HEADER_SIZE]).to_string(), BITCOIN_GENESIS_HASH);

        let block = coin.genesis_block(&raw).unwrap();
        assert_eq!(block.len(), HEADER_SIZE + 1);
        assert_eq!(&block[..HEADER_SIZE], &raw[..HEADER_SIZE]);
        assert_eq!(block[HEADER_SIZE], 0);

        // The stripped block decodes with no transactions.
        let decoded = coin.block(block).unwrap();
        assert!(decoded.txs.is_empty());
        assert_eq!(decoded.hash().to_string(), BITCOIN_GENESIS_HASH);
    }

    #[test]
    fn test_genesis_mismatch() {
        let raw = hex::decode(BITCOIN_GENESIS_HEADER).unwrap();
        match RADIANT_MAINNET.genesis_block(&raw) {
            Err(ChainError::GenesisMismatch { got, expected }) => {
                assert_eq!(got, BITCOIN_GENESIS_HASH);
                assert_eq!(expected, RADIANT_MAINNET.genesis_hash);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
        assert!(RADIANT_MAINNET.genesis_block(&[]).is_err());
    }

    #[test]
    fn test_block_truncated() {
        let mut raw = hex::decode(BITCOIN_GENESIS_HEADER).unwrap();
        raw.push(0x01);
        let err = RADIANT_MAINNET.block(raw).unwrap_err();
        assert!(matches!(err, ChainError::Transaction(_)));
        assert!(err.is_truncated());
    }

    #[test]
    fn test_decimal_value() {
        let coin = &RADIANT_MAINNET;
        assert_eq!(coin.decimal_value(0), "0");
        assert_eq!(coin.decimal_value(100_000_000), "1");
        assert_eq!(coin.decimal_value(150_000_000), "1.5");
        assert_eq!(coin.decimal_value(1), "0.00000001");
        assert_eq!(coin.decimal_value(-250_000_000), "-2.5");
        assert_eq!(coin.decimal_value(i64::MIN), "-92233720368.54775808");
        assert_eq!(format_decimal(1, 3), "0.33333333333333333333");
    }

    #[test]
    fn test_max_fetch_blocks() {
        assert_eq!(RADIANT_MAINNET.max_fetch_blocks(0), 1000);
        assert_eq!(RADIANT_MAINNET.max_fetch_blocks(129_999), 1000);
        assert_eq!(RADIANT_MAINNET.max_fetch_blocks(130_000), 100);

        assert_eq!(RADIANT_SCALING_TESTNET.max_fetch_blocks(10), 100);
        assert_eq!(RADIANT_SCALING_TESTNET.max_fetch_blocks(11), 3);
    }
}
