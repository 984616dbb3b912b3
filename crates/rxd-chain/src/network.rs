//! Network identifiers.

use std::fmt;
use std::str::FromStr;

use crate::ChainError;

/// A Radiant network a coin configuration belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    /// High-throughput test network with its own genesis block.
    ScalingTest,
    Regtest,
}

impl Network {
    /// Lowercase name as used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::ScalingTest => "scalingtest",
            Network::Regtest => "regtest",
        }
    }

    pub fn names() -> [&'static str; 4] {
        ["mainnet", "testnet", "scalingtest", "regtest"]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainError;

    /// Parse a network name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "scalingtest" => Ok(Network::ScalingTest),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ChainError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for name in Network::names() {
            let net: Network = name.parse().unwrap();
            assert_eq!(net.to_string(), name);
        }
        assert_eq!("RegTest".parse::<Network>().unwrap(), Network::Regtest);
    }

    #[test]
    fn test_unknown_network() {
        assert!(matches!(
            "signet".parse::<Network>(),
            Err(ChainError::UnknownNetwork(n)) if n == "signet"
        ));
    }
}
