//! Error types for address encoding and decoding.
//!
//! Encoding and decoding fail with two separate, flat error enums. Every
//! variant carries the data needed to build a precise diagnostic, and none of
//! them is retryable: the same input always fails the same way.

use crate::registry::PubKeyType;

/// Error codes for FFI and command-line integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AddressErrorCode {
    /// Raw public key length does not match its algorithm
    InvalidPubkeyLength = 1001,
    /// Encoded address length deviates from the configured length
    InvalidLength = 1002,
    /// Checksummed text transform rejected the payload
    ChecksumEncode = 1003,
    /// Precomputed public key hash has the wrong length
    InvalidEncodeHashLength = 1004,
    /// Checksum mismatch or malformed address text
    ChecksumDecode = 2001,
    /// Address prefix is not a known network
    UnknownPrefix = 2002,
    /// Decoded payload is shorter than the tag header
    PayloadTooShort = 2003,
    /// Version byte is not allocated
    UnknownVersion = 2004,
    /// Public key type byte is not allocated
    UnknownPubKeyType = 2005,
    /// Digest region has the wrong length
    InvalidDecodeHashLength = 2006,
}

impl AddressErrorCode {
    /// Numeric value of the code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Failure reported by the checksummed text transform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ChecksumError {
    reason: String,
}

impl ChecksumError {
    /// Create a checksum error from the transform's reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The transform's description of the failure.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors raised while encoding an address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The raw public key length does not match the length registered for its type.
    #[error("invalid public key length for {pubkey_type}: got {got}, expected {expected}")]
    InvalidPubkeyLength {
        /// Type the key was declared as
        pubkey_type: PubKeyType,
        /// Length of the supplied key
        got: usize,
        /// Length registered for the type
        expected: usize,
    },

    /// The encoded address has an unexpected length.
    #[error("invalid address length: got {got}, expected {expected}")]
    InvalidLength {
        /// Length of the encoded string
        got: usize,
        /// Configured address length
        expected: usize,
    },

    /// The checksummed text transform rejected the input.
    ///
    /// The reason is part of the message, not a separate error source.
    #[error("checksum encode failure: {0}")]
    ChecksumEncode(ChecksumError),

    /// A precomputed public key hash has the wrong length.
    #[error("invalid hash length: got {got}, expected {expected}")]
    InvalidHashLength {
        /// Length of the supplied hash
        got: usize,
        /// Output length of the digest provider
        expected: usize,
    },
}

impl EncodeError {
    /// Get the error code for FFI/CLI integration.
    pub fn code(&self) -> AddressErrorCode {
        match self {
            Self::InvalidPubkeyLength { .. } => AddressErrorCode::InvalidPubkeyLength,
            Self::InvalidLength { .. } => AddressErrorCode::InvalidLength,
            Self::ChecksumEncode(_) => AddressErrorCode::ChecksumEncode,
            Self::InvalidHashLength { .. } => AddressErrorCode::InvalidEncodeHashLength,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors raised while decoding an address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Checksum mismatch or malformed address structure.
    #[error("checksum decode failure: {0}")]
    ChecksumDecode(ChecksumError),

    /// The address prefix is not in the network registry.
    #[error("unknown address prefix: {prefix}")]
    UnknownPrefix {
        /// Prefix found in the address
        prefix: String,
    },

    /// The decoded payload is shorter than the tag header.
    #[error("payload too short: got {got}, need at least {need}")]
    PayloadTooShort {
        /// Payload length
        got: usize,
        /// Minimum payload length
        need: usize,
    },

    /// The version byte is not a currently allocated code.
    #[error("unknown version code: 0x{code:02x}")]
    UnknownVersion {
        /// Byte found in the payload
        code: u8,
    },

    /// The public key type byte is not a currently allocated code.
    #[error("unknown public key type code: 0x{code:02x}")]
    UnknownPubKeyType {
        /// Byte found in the payload
        code: u8,
    },

    /// The digest region does not match the digest provider's output length.
    #[error("invalid hash length: got {got}, expected {expected}")]
    InvalidHashLength {
        /// Length of the digest region
        got: usize,
        /// Output length of the digest provider
        expected: usize,
    },
}

impl DecodeError {
    /// Get the error code for FFI/CLI integration.
    pub fn code(&self) -> AddressErrorCode {
        match self {
            Self::ChecksumDecode(_) => AddressErrorCode::ChecksumDecode,
            Self::UnknownPrefix { .. } => AddressErrorCode::UnknownPrefix,
            Self::PayloadTooShort { .. } => AddressErrorCode::PayloadTooShort,
            Self::UnknownVersion { .. } => AddressErrorCode::UnknownVersion,
            Self::UnknownPubKeyType { .. } => AddressErrorCode::UnknownPubKeyType,
            Self::InvalidHashLength { .. } => AddressErrorCode::InvalidDecodeHashLength,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create an unknown prefix error.
    pub fn unknown_prefix(prefix: impl Into<String>) -> Self {
        Self::UnknownPrefix {
            prefix: prefix.into(),
        }
    }
}
