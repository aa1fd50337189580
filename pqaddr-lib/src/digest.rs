//! Digest providers.
//!
//! An address embeds a fixed-length digest of the public key rather than the
//! key itself, so address length does not depend on the key algorithm.

use crate::PubkeyHash;
use sha2::{Digest, Sha256};

/// Hash primitive with a fixed output length.
///
/// Implementations must be pure and deterministic: the same input always
/// produces the same `output_len()` bytes.
pub trait DigestProvider {
    /// Algorithm name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Length of every digest this provider produces.
    fn output_len(&self) -> usize;

    /// Hash `data`.
    fn digest(&self, data: &[u8]) -> PubkeyHash;
}

/// SHA-256 digest provider (32-byte output).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Digest;

impl Sha256Digest {
    /// Output length of SHA-256.
    pub const OUTPUT_LEN: usize = 32;
}

impl DigestProvider for Sha256Digest {
    fn name(&self) -> &'static str {
        "SHA-256"
    }

    fn output_len(&self) -> usize {
        Self::OUTPUT_LEN
    }

    fn digest(&self, data: &[u8]) -> PubkeyHash {
        let mut hasher = Sha256::new();
        hasher.update(data);
        PubkeyHash::new(hasher.finalize().to_vec())
    }
}
