//! Common helpers for pqaddr-lib integration tests

use pqaddr_lib::{encode_address, AddressParams, Network, PubKeyType};

/// Deterministic key of the registered length
pub fn key_for(pubkey_type: PubKeyType, seed: u8) -> Vec<u8> {
    (0..pubkey_type.pubkey_len())
        .map(|i| (i as u8).wrapping_mul(13).wrapping_add(seed))
        .collect()
}

/// Encode a deterministic key, panicking on failure
pub fn address_for(network: Network, pubkey_type: PubKeyType, seed: u8) -> String {
    let key = key_for(pubkey_type, seed);
    encode_address(&AddressParams::new(network, pubkey_type, &key)).unwrap()
}

/// Hand-build a bech32m string, bypassing the codec's validation
#[allow(dead_code)]
pub fn raw_bech32m(prefix: &str, data: &[u8]) -> String {
    let hrp = bech32::Hrp::parse(prefix).unwrap();
    bech32::encode::<bech32::Bech32m>(hrp, data).unwrap()
}
