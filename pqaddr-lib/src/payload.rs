//! Address payload layout.
//!
//! The payload is the byte string handed to the checksummed text transform:
//!
//! | Offset | Length | Field           |
//! |--------|--------|-----------------|
//! | 0      | 1      | version code    |
//! | 1      | 1      | pubkey type code|
//! | 2      | N      | public key hash |
//!
//! `N` is fixed by the version's digest provider (32 for V1).

use crate::{DecodeError, PubKeyType, Version};

/// Length of the tag header preceding the digest.
pub const HEADER_LEN: usize = 2;

/// Packed `[version][pubkey type][digest..]` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressPayload(Vec<u8>);

impl AddressPayload {
    /// Pack the header tags and digest.
    ///
    /// The caller guarantees `digest` has the provider's output length.
    pub fn pack(version: Version, pubkey_type: PubKeyType, digest: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(HEADER_LEN + digest.len());
        bytes.push(version.code());
        bytes.push(pubkey_type.code());
        bytes.extend_from_slice(digest);
        Self(bytes)
    }

    /// Split decoded bytes into header tags and candidate digest.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::PayloadTooShort`] if fewer than [`HEADER_LEN`] bytes
    /// - [`DecodeError::UnknownVersion`] / [`DecodeError::UnknownPubKeyType`]
    ///   if a header byte is not allocated; the version is checked first
    ///
    /// The digest length is not checked here.
    pub fn unpack(bytes: &[u8]) -> Result<UnpackedPayload<'_>, DecodeError> {
        let [version, pubkey_type, digest @ ..] = bytes else {
            return Err(DecodeError::PayloadTooShort {
                got: bytes.len(),
                need: HEADER_LEN,
            });
        };

        Ok(UnpackedPayload {
            version: Version::from_code(*version)?,
            pubkey_type: PubKeyType::from_code(*pubkey_type)?,
            digest,
        })
    }

    /// Payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the payload has no bytes (never the case for packed payloads).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for AddressPayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Header tags and digest region borrowed from a decoded payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnpackedPayload<'a> {
    /// Decoded version tag.
    pub version: Version,
    /// Decoded public key type tag.
    pub pubkey_type: PubKeyType,
    /// Bytes following the header.
    pub digest: &'a [u8],
}
