//! Address format versions.

use crate::digest::Sha256Digest;
use crate::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Address format version, stored in payload byte 0.
///
/// A version fixes the payload layout and the digest algorithm. V1 is
/// `[version][pubkey type][SHA-256 digest]` with no separate hash algorithm
/// byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Version {
    /// Version 1: SHA-256 digest, code `0x00`.
    #[default]
    V1,
}

impl Version {
    /// Every allocated version.
    pub const ALL: [Version; 1] = [Version::V1];

    /// Codes reserved for versions (64 slots).
    pub const RESERVED: RangeInclusive<u8> = 0x00..=0x3F;

    /// Byte code embedded in the payload.
    pub fn code(self) -> u8 {
        match self {
            Self::V1 => 0x00,
        }
    }

    /// Reverse lookup from byte code.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownVersion`] for unallocated codes,
    /// including codes outside the reserved range.
    pub fn from_code(code: u8) -> Result<Self, DecodeError> {
        match code {
            0x00 => Ok(Self::V1),
            _ => Err(DecodeError::UnknownVersion { code }),
        }
    }

    /// Returns true if `code` falls in the range reserved for versions.
    pub fn is_reserved(code: u8) -> bool {
        Self::RESERVED.contains(&code)
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "V1",
        }
    }

    /// Digest provider mandated by this version.
    pub fn digest_provider(self) -> Sha256Digest {
        match self {
            Self::V1 => Sha256Digest,
        }
    }
}

impl TryFrom<u8> for Version {
    type Error = DecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = super::normalize_tag_name(s);
        Self::ALL
            .into_iter()
            .find(|version| version.as_str() == name)
            .ok_or_else(|| format!("unknown address version '{}'", s.trim()))
    }
}
