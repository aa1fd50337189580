//! Post-quantum address library.
//!
//! Encodes public keys of post-quantum signature schemes (ML-DSA, SLH-DSA)
//! into short, checksummed, self-describing address strings, and decodes them
//! back into their components. The crate is stateless and performs no I/O.
//!
//! # Format
//!
//! An address is the bech32m (BIP-350) encoding of the payload
//! `[version][pubkey type][SHA-256(pubkey)]` under a network prefix:
//! `yp` for mainnet, `rh` for testnet. Since only the digest is embedded,
//! every V1 address is exactly [`ADDRESS_LENGTH`] (64) characters long,
//! whatever the size of the key.
//!
//! # Example
//!
//! ```
//! use pqaddr_lib::{decode_address, encode_address, AddressParams, Network, PubKeyType, Version};
//!
//! let pubkey = vec![0x42u8; PubKeyType::MlDsa44.pubkey_len()];
//! let params = AddressParams::new(Network::Mainnet, PubKeyType::MlDsa44, &pubkey);
//!
//! let address = encode_address(&params).unwrap();
//! assert!(address.starts_with("yp1"));
//!
//! let decoded = decode_address(&address).unwrap();
//! assert_eq!(decoded.network, Network::Mainnet);
//! assert_eq!(decoded.version, Version::V1);
//! assert_eq!(decoded.pubkey_type.to_string(), "MLDSA44");
//! ```
//!
//! # Features
//!
//! - **tracing**: instrument codec operations with `tracing` spans; failures
//!   are recorded as error events. Key bytes are never recorded.
//! - **test-utils**: expose `test_utils` fixtures and assertions to
//!   downstream test suites.

pub mod address;
pub mod checksum;
pub mod codec;
pub mod config;
pub mod digest;
pub mod errors;
pub mod payload;
pub mod prelude;
pub mod registry;

/// Test utilities for address testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use address::{AddressParams, DecodedAddress, PubkeyHash, ADDRESS_LENGTH};
pub use checksum::{Bech32mText, ChecksummedText};
pub use codec::AddressCodec;
pub use config::CodecConfig;
pub use digest::{DigestProvider, Sha256Digest};
pub use errors::{AddressErrorCode, ChecksumError, DecodeError, EncodeError};
pub use payload::AddressPayload;
pub use registry::{Network, PubKeyType, Version};

/// Encodes a public key into an address with the standard codec.
///
/// # Examples
/// ```
/// # use pqaddr_lib::{encode_address, AddressParams, EncodeError, Network, PubKeyType};
/// let short_key = [0u8; 31];
/// let params = AddressParams::new(Network::Testnet, PubKeyType::SlhDsaSha2_128s, &short_key);
/// assert!(matches!(
///     encode_address(&params),
///     Err(EncodeError::InvalidPubkeyLength { got: 31, expected: 32, .. })
/// ));
/// ```
pub fn encode_address(params: &AddressParams<'_>) -> Result<String, EncodeError> {
    AddressCodec::standard().encode_address(params)
}

/// Decodes an address into its components with the standard codec.
///
/// # Semantics
/// - Accepts all-lowercase or all-uppercase text; mixed case is rejected.
/// - Returns the digest embedded in the address, never the public key.
///
/// # Examples
/// ```
/// # use pqaddr_lib::{decode_address, DecodeError};
/// match decode_address("yp1qqqqqqqq") {
///     Ok(decoded) => println!("{} address", decoded.network),
///     Err(err) => println!("rejected ({}): {}", err.code().as_i32(), err),
/// }
/// ```
pub fn decode_address(address: &str) -> Result<DecodedAddress, DecodeError> {
    AddressCodec::standard().decode_address(address)
}

/// Encodes an address from an already computed public key hash with the
/// standard codec.
pub fn encode_pubkey_hash(
    network: Network,
    version: Version,
    pubkey_type: PubKeyType,
    pubkey_hash: &[u8],
) -> Result<String, EncodeError> {
    AddressCodec::standard().encode_pubkey_hash(network, version, pubkey_type, pubkey_hash)
}
