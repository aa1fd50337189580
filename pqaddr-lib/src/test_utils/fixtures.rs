//! Test fixtures and data generators.

use crate::{Network, PubKeyType};

/// The 32 characters of the bech32 data alphabet.
pub const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Deterministic key of the registered length for `pubkey_type`.
    ///
    /// Different seeds give different keys.
    pub fn pubkey(pubkey_type: PubKeyType, seed: u8) -> Vec<u8> {
        (0..pubkey_type.pubkey_len())
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect()
    }

    /// Key that is `delta` bytes longer (or shorter) than registered.
    pub fn pubkey_with_len_delta(pubkey_type: PubKeyType, delta: isize) -> Vec<u8> {
        let len = pubkey_type.pubkey_len().saturating_add_signed(delta);
        vec![0x5a; len]
    }

    /// Every (network, key type) combination.
    pub fn all_pairs() -> Vec<(Network, PubKeyType)> {
        Network::ALL
            .into_iter()
            .flat_map(|network| PubKeyType::ALL.into_iter().map(move |ty| (network, ty)))
            .collect()
    }
}

/// Replace the character at `index` with `replacement`.
///
/// # Panics
/// Panics if `index` is not a character boundary.
pub fn substitute_char(address: &str, index: usize, replacement: char) -> String {
    let mut mutated = String::with_capacity(address.len());
    mutated.push_str(&address[..index]);
    mutated.push(replacement);
    mutated.push_str(&address[index + 1..]);
    mutated
}
