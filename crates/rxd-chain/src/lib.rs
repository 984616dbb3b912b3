/// Radiant chain parameters.
///
/// Provides the static coin parameter table looked up by coin name and
/// network, hashX derivation for the address index, and the genesis and
/// block helpers that sit between the daemon's raw blocks and the codec.

pub mod coins;
pub mod network;

mod error;
pub use error::ChainError;
pub use coins::{hashx_from_script, lookup_coin, CoinParams, HashX};
pub use network::Network;
