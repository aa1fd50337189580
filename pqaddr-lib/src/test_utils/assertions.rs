//! Test assertions and verification helpers.

use crate::{
    decode_address, encode_address, AddressErrorCode, AddressParams, DigestProvider, Network,
    PubKeyType, Sha256Digest, Version, ADDRESS_LENGTH,
};

/// Assert that `address` has the canonical shape for `network`.
///
/// # Panics
/// Panics if the prefix, separator, length or case is wrong.
pub fn assert_address_shape(address: &str, network: Network) {
    assert_eq!(
        address.len(),
        ADDRESS_LENGTH,
        "address {} should be {} characters",
        address,
        ADDRESS_LENGTH
    );
    let expected_start = format!("{}1", network.prefix());
    assert!(
        address.starts_with(&expected_start),
        "address {} should start with {}",
        address,
        expected_start
    );
    assert_eq!(
        address,
        address.to_ascii_lowercase(),
        "encoded addresses should be lowercase"
    );
}

/// Encode, check shape, decode and compare every component.
///
/// Returns the encoded address.
///
/// # Panics
/// Panics if any step fails or a component does not survive the round trip.
pub fn assert_round_trip(network: Network, pubkey_type: PubKeyType, pubkey: &[u8]) -> String {
    let params = AddressParams::new(network, pubkey_type, pubkey);
    let address = match encode_address(&params) {
        Ok(address) => address,
        Err(e) => panic!("encoding {} for {} failed: {}", pubkey_type, network, e),
    };
    assert_address_shape(&address, network);

    let decoded = match decode_address(&address) {
        Ok(decoded) => decoded,
        Err(e) => panic!("decoding {} failed: {}", address, e),
    };
    assert_eq!(decoded.network, network);
    assert_eq!(decoded.version, Version::V1);
    assert_eq!(decoded.pubkey_type, pubkey_type);
    assert_eq!(decoded.pubkey_hash, Sha256Digest.digest(pubkey));

    address
}

/// Assert that decoding `address` fails with `code`.
///
/// # Panics
/// Panics if decoding succeeds or fails with another code.
pub fn assert_decode_fails_with(address: &str, code: AddressErrorCode) {
    match decode_address(address) {
        Ok(decoded) => panic!("expected {:?}, decoded {:?}", code, decoded),
        Err(e) => assert_eq!(e.code(), code, "unexpected error for {}: {}", address, e),
    }
}
