//! Codec configuration.

use crate::ADDRESS_LENGTH;
use serde::{Deserialize, Serialize};

/// Configuration for an [`AddressCodec`](crate::AddressCodec).
///
/// Producers and verifiers of one address profile must agree on these values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Exact length every encoded address must have.
    #[serde(default = "default_address_length")]
    pub address_length: usize,

    /// Accept all-uppercase addresses (as produced for QR codes) when decoding.
    #[serde(default = "default_accept_uppercase")]
    pub accept_uppercase: bool,
}

fn default_address_length() -> usize {
    ADDRESS_LENGTH
}

fn default_accept_uppercase() -> bool {
    true
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            address_length: default_address_length(),
            accept_uppercase: default_accept_uppercase(),
        }
    }
}

impl CodecConfig {
    /// Create the canonical configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected address length.
    pub fn with_address_length(mut self, length: usize) -> Self {
        self.address_length = length;
        self
    }

    /// Set whether uppercase addresses are accepted.
    pub fn with_accept_uppercase(mut self, accept: bool) -> Self {
        self.accept_uppercase = accept;
        self
    }
}
