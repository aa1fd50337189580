//! Tag registries.
//!
//! Closed enumerations for the three tags an address carries: the network
//! (through its bech32 prefix), the format version and the public key
//! algorithm. Each registry decodes totally: every byte or prefix either maps
//! to an allocated value or fails with a typed [`DecodeError`](crate::DecodeError).
//!
//! # Code Ranges
//!
//! | Tag        | Reserved range | Allocated                    |
//! |------------|----------------|------------------------------|
//! | Version    | `0x00..=0x3F`  | `0x00` (V1)                  |
//! | PubKeyType | `0x40..=0xFF`  | `0x40..=0x42`, `0x50..=0x5D` |
//!
//! The ranges are disjoint so that a version byte can never be mistaken for a
//! key type byte. New values are added in unused codes of the matching range;
//! existing codes are never reinterpreted.

mod network;
mod pubkey_type;
mod version;

pub use network::Network;
pub use pubkey_type::PubKeyType;
pub use version::Version;

/// Normalize a tag name for lookup: ASCII uppercase with `-` and `_` removed.
pub(crate) fn normalize_tag_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
