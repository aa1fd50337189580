//! Address value types.

use crate::{EncodeError, Network, PubKeyType, Version};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical address length in characters: 2-character prefix, separator,
/// 55 data characters for the 34-byte V1 payload and a 6-character checksum.
pub const ADDRESS_LENGTH: usize = 64;

/// Digest of a public key as embedded in an address.
///
/// Displays and serializes as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PubkeyHash(Vec<u8>);

impl PubkeyHash {
    /// Wrap digest bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex-encoded hash.
    pub fn from_hex(hex_str: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(hex_str.trim()).map(Self)
    }

    /// Get the hash bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the hash has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for PubkeyHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for PubkeyHash {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PubkeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PubkeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubkeyHash({})", self.to_hex())
    }
}

impl Serialize for PubkeyHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PubkeyHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(de::Error::custom)
    }
}

/// Parameters needed to encode an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressParams<'a> {
    /// Network the address is for.
    pub network: Network,
    /// Address format version.
    pub version: Version,
    /// Algorithm of the public key.
    pub pubkey_type: PubKeyType,
    /// Raw public key bytes.
    pub pubkey_bytes: &'a [u8],
}

impl<'a> AddressParams<'a> {
    /// Create V1 parameters.
    pub fn new(network: Network, pubkey_type: PubKeyType, pubkey_bytes: &'a [u8]) -> Self {
        Self {
            network,
            version: Version::V1,
            pubkey_type,
            pubkey_bytes,
        }
    }

    /// Set the format version.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }
}

/// Components recovered from a valid address.
///
/// `pubkey_hash` is the digest embedded at encode time; the original public
/// key cannot be recovered from an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedAddress {
    /// Network, from the prefix.
    pub network: Network,
    /// Address format version.
    pub version: Version,
    /// Algorithm of the public key.
    pub pubkey_type: PubKeyType,
    /// Digest of the public key.
    pub pubkey_hash: PubkeyHash,
}

impl DecodedAddress {
    /// Hex representation of the public key hash.
    pub fn pubkey_hash_hex(&self) -> String {
        self.pubkey_hash.to_hex()
    }

    /// Re-encode these components with the default codec.
    ///
    /// The result is the canonical lowercase form of the address this value
    /// was decoded from.
    pub fn to_address(&self) -> Result<String, EncodeError> {
        crate::encode_pubkey_hash(
            self.network,
            self.version,
            self.pubkey_type,
            self.pubkey_hash.as_bytes(),
        )
    }
}
