//! Prelude module for convenient imports.
//!
//! ```rust
//! use pqaddr_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Tags: `Network`, `Version`, `PubKeyType`
//! - Values: `AddressParams`, `DecodedAddress`, `PubkeyHash`
//! - Codec: `AddressCodec`, `CodecConfig` and the crate-level functions
//! - Error types: `EncodeError`, `DecodeError`, `AddressErrorCode`
//! - Collaborator traits: `DigestProvider`, `ChecksummedText`

// Tags
pub use crate::registry::{Network, PubKeyType, Version};

// Values
pub use crate::address::{AddressParams, DecodedAddress, PubkeyHash, ADDRESS_LENGTH};

// Codec
pub use crate::codec::AddressCodec;
pub use crate::config::CodecConfig;
pub use crate::{decode_address, encode_address, encode_pubkey_hash};

// Error handling
pub use crate::errors::{AddressErrorCode, ChecksumError, DecodeError, EncodeError};

// Collaborators
pub use crate::checksum::{Bech32mText, ChecksummedText};
pub use crate::digest::{DigestProvider, Sha256Digest};
