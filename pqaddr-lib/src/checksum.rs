//! Checksummed text transform.
//!
//! The codec talks to the text encoding through [`ChecksummedText`] only, so
//! any checksummed byte-to-text scheme keyed by a short prefix can be plugged
//! in. [`Bech32mText`] is the transform used by the address format
//! (BIP-350 bech32m).

use crate::ChecksumError;
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32m, Hrp};

/// Byte payload to checksummed text, and back.
pub trait ChecksummedText {
    /// Encode `data` under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError`] if the transform rejects the input (for
    /// example an invalid prefix or an over-long payload).
    fn encode(&self, prefix: &str, data: &[u8]) -> Result<String, ChecksumError>;

    /// Decode `text` into its lowercase prefix and payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError`] on checksum mismatch or malformed structure.
    fn decode(&self, text: &str) -> Result<(String, Vec<u8>), ChecksumError>;
}

/// bech32m transform backed by the `bech32` crate.
///
/// Encoding always produces lowercase text. Decoding accepts all-lowercase
/// or all-uppercase text, rejects mixed case and rejects strings carrying a
/// legacy bech32 checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bech32mText;

impl ChecksummedText for Bech32mText {
    fn encode(&self, prefix: &str, data: &[u8]) -> Result<String, ChecksumError> {
        let hrp = Hrp::parse(prefix)
            .map_err(|e| ChecksumError::new(format!("invalid prefix '{}': {}", prefix, e)))?;
        bech32::encode::<Bech32m>(hrp, data).map_err(|e| ChecksumError::new(e.to_string()))
    }

    fn decode(&self, text: &str) -> Result<(String, Vec<u8>), ChecksumError> {
        let checked = CheckedHrpstring::new::<Bech32m>(text)
            .map_err(|e| ChecksumError::new(e.to_string()))?;
        let prefix = checked.hrp().as_str().to_ascii_lowercase();
        let data: Vec<u8> = checked.byte_iter().collect();

        // Only the zero-padded form of a payload is accepted, so each payload
        // has exactly one lowercase encoding.
        let canonical = self.encode(&prefix, &data)?;
        if !canonical.eq_ignore_ascii_case(text) {
            return Err(ChecksumError::new("non-zero padding in data part"));
        }

        Ok((prefix, data))
    }
}
