//! Network registry and bech32 prefix mapping.

use crate::DecodeError;
use bech32::Hrp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network an address belongs to.
///
/// The network is carried by the address prefix (bech32 human-readable part).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet, prefix `yp`.
    #[default]
    Mainnet,
    /// Testnet, prefix `rh`.
    Testnet,
}

impl Network {
    /// Every network, in registry order.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    const MAINNET_PREFIX: &'static str = "yp";
    const TESTNET_PREFIX: &'static str = "rh";

    /// Get the network name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Get the address prefix (always lowercase).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Mainnet => Self::MAINNET_PREFIX,
            Self::Testnet => Self::TESTNET_PREFIX,
        }
    }

    /// Get the prefix as a bech32 [`Hrp`].
    pub fn hrp(&self) -> Hrp {
        Hrp::parse_unchecked(self.prefix())
    }

    /// Resolve a network from an address prefix.
    ///
    /// Matching ignores ASCII case, since bech32 strings may be written
    /// entirely in uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPrefix`] for any other prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use pqaddr_lib::Network;
    ///
    /// assert_eq!(Network::from_prefix("yp").unwrap(), Network::Mainnet);
    /// assert_eq!(Network::from_prefix("RH").unwrap(), Network::Testnet);
    /// assert!(Network::from_prefix("bc").is_err());
    /// ```
    pub fn from_prefix(prefix: &str) -> Result<Self, DecodeError> {
        Self::ALL
            .into_iter()
            .find(|network| network.prefix().eq_ignore_ascii_case(prefix))
            .ok_or_else(|| DecodeError::unknown_prefix(prefix))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses network names ignoring ASCII case and surrounding whitespace.
/// `main` and `test` are accepted as short forms of `mainnet` and `testnet`.
impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(format!(
                "unknown network '{}', expected mainnet or testnet",
                other
            )),
        }
    }
}
