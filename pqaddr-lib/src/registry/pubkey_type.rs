//! Public key algorithm registry.

use crate::DecodeError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Signature algorithm of the public key behind an address, stored in
/// payload byte 1.
///
/// ML-DSA (FIPS 204) occupies `0x40..=0x42`; SLH-DSA (FIPS 205) occupies
/// `0x50..=0x55` for the SHA2 parameter sets and `0x58..=0x5D` for SHAKE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PubKeyType {
    /// ML-DSA-44, 1312-byte public key.
    MlDsa44,
    /// ML-DSA-65, 1952-byte public key.
    MlDsa65,
    /// ML-DSA-87, 2592-byte public key.
    MlDsa87,
    /// SLH-DSA-SHA2-128s, 32-byte public key.
    SlhDsaSha2_128s,
    /// SLH-DSA-SHA2-128f, 32-byte public key.
    SlhDsaSha2_128f,
    /// SLH-DSA-SHA2-192s, 48-byte public key.
    SlhDsaSha2_192s,
    /// SLH-DSA-SHA2-192f, 48-byte public key.
    SlhDsaSha2_192f,
    /// SLH-DSA-SHA2-256s, 64-byte public key.
    SlhDsaSha2_256s,
    /// SLH-DSA-SHA2-256f, 64-byte public key.
    SlhDsaSha2_256f,
    /// SLH-DSA-SHAKE-128s, 32-byte public key.
    SlhDsaShake128s,
    /// SLH-DSA-SHAKE-128f, 32-byte public key.
    SlhDsaShake128f,
    /// SLH-DSA-SHAKE-192s, 48-byte public key.
    SlhDsaShake192s,
    /// SLH-DSA-SHAKE-192f, 48-byte public key.
    SlhDsaShake192f,
    /// SLH-DSA-SHAKE-256s, 64-byte public key.
    SlhDsaShake256s,
    /// SLH-DSA-SHAKE-256f, 64-byte public key.
    SlhDsaShake256f,
}

impl PubKeyType {
    /// Every allocated public key type, in code order.
    pub const ALL: [PubKeyType; 15] = [
        PubKeyType::MlDsa44,
        PubKeyType::MlDsa65,
        PubKeyType::MlDsa87,
        PubKeyType::SlhDsaSha2_128s,
        PubKeyType::SlhDsaSha2_128f,
        PubKeyType::SlhDsaSha2_192s,
        PubKeyType::SlhDsaSha2_192f,
        PubKeyType::SlhDsaSha2_256s,
        PubKeyType::SlhDsaSha2_256f,
        PubKeyType::SlhDsaShake128s,
        PubKeyType::SlhDsaShake128f,
        PubKeyType::SlhDsaShake192s,
        PubKeyType::SlhDsaShake192f,
        PubKeyType::SlhDsaShake256s,
        PubKeyType::SlhDsaShake256f,
    ];

    /// Codes reserved for public key types (192 slots).
    pub const RESERVED: RangeInclusive<u8> = 0x40..=0xFF;

    /// Byte code embedded in the payload.
    pub fn code(self) -> u8 {
        match self {
            Self::MlDsa44 => 0x40,
            Self::MlDsa65 => 0x41,
            Self::MlDsa87 => 0x42,
            Self::SlhDsaSha2_128s => 0x50,
            Self::SlhDsaSha2_128f => 0x51,
            Self::SlhDsaSha2_192s => 0x52,
            Self::SlhDsaSha2_192f => 0x53,
            Self::SlhDsaSha2_256s => 0x54,
            Self::SlhDsaSha2_256f => 0x55,
            Self::SlhDsaShake128s => 0x58,
            Self::SlhDsaShake128f => 0x59,
            Self::SlhDsaShake192s => 0x5A,
            Self::SlhDsaShake192f => 0x5B,
            Self::SlhDsaShake256s => 0x5C,
            Self::SlhDsaShake256f => 0x5D,
        }
    }

    /// Reverse lookup from byte code.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPubKeyType`] for unallocated codes.
    pub fn from_code(code: u8) -> Result<Self, DecodeError> {
        match code {
            0x40 => Ok(Self::MlDsa44),
            0x41 => Ok(Self::MlDsa65),
            0x42 => Ok(Self::MlDsa87),
            0x50 => Ok(Self::SlhDsaSha2_128s),
            0x51 => Ok(Self::SlhDsaSha2_128f),
            0x52 => Ok(Self::SlhDsaSha2_192s),
            0x53 => Ok(Self::SlhDsaSha2_192f),
            0x54 => Ok(Self::SlhDsaSha2_256s),
            0x55 => Ok(Self::SlhDsaSha2_256f),
            0x58 => Ok(Self::SlhDsaShake128s),
            0x59 => Ok(Self::SlhDsaShake128f),
            0x5A => Ok(Self::SlhDsaShake192s),
            0x5B => Ok(Self::SlhDsaShake192f),
            0x5C => Ok(Self::SlhDsaShake256s),
            0x5D => Ok(Self::SlhDsaShake256f),
            _ => Err(DecodeError::UnknownPubKeyType { code }),
        }
    }

    /// Returns true if `code` falls in the range reserved for key types.
    pub fn is_reserved(code: u8) -> bool {
        Self::RESERVED.contains(&code)
    }

    /// Expected raw public key length in bytes.
    ///
    /// Only used to validate keys before hashing; the length is not stored in
    /// the address.
    pub fn pubkey_len(self) -> usize {
        match self {
            Self::MlDsa44 => 1312,
            Self::MlDsa65 => 1952,
            Self::MlDsa87 => 2592,
            Self::SlhDsaSha2_128s
            | Self::SlhDsaSha2_128f
            | Self::SlhDsaShake128s
            | Self::SlhDsaShake128f => 32,
            Self::SlhDsaSha2_192s
            | Self::SlhDsaSha2_192f
            | Self::SlhDsaShake192s
            | Self::SlhDsaShake192f => 48,
            Self::SlhDsaSha2_256s
            | Self::SlhDsaSha2_256f
            | Self::SlhDsaShake256s
            | Self::SlhDsaShake256f => 64,
        }
    }

    /// Canonical name, as reported in decoded addresses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MlDsa44 => "MLDSA44",
            Self::MlDsa65 => "MLDSA65",
            Self::MlDsa87 => "MLDSA87",
            Self::SlhDsaSha2_128s => "SLHDSA_SHA2_128S",
            Self::SlhDsaSha2_128f => "SLHDSA_SHA2_128F",
            Self::SlhDsaSha2_192s => "SLHDSA_SHA2_192S",
            Self::SlhDsaSha2_192f => "SLHDSA_SHA2_192F",
            Self::SlhDsaSha2_256s => "SLHDSA_SHA2_256S",
            Self::SlhDsaSha2_256f => "SLHDSA_SHA2_256F",
            Self::SlhDsaShake128s => "SLHDSA_SHAKE_128S",
            Self::SlhDsaShake128f => "SLHDSA_SHAKE_128F",
            Self::SlhDsaShake192s => "SLHDSA_SHAKE_192S",
            Self::SlhDsaShake192f => "SLHDSA_SHAKE_192F",
            Self::SlhDsaShake256s => "SLHDSA_SHAKE_256S",
            Self::SlhDsaShake256f => "SLHDSA_SHAKE_256F",
        }
    }

    /// Algorithm family name.
    pub fn family(&self) -> &'static str {
        match self {
            Self::MlDsa44 | Self::MlDsa65 | Self::MlDsa87 => "ML-DSA",
            _ => "SLH-DSA",
        }
    }
}

impl TryFrom<u8> for PubKeyType {
    type Error = DecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for PubKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses canonical names and their common spellings: ASCII case, `-` and
/// `_` are ignored, so `ml-dsa-44` and `slh-dsa-shake-256f` are accepted.
impl FromStr for PubKeyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = super::normalize_tag_name(s);
        Self::ALL
            .into_iter()
            .find(|kind| super::normalize_tag_name(kind.as_str()) == name)
            .ok_or_else(|| format!("unknown public key type '{}'", s.trim()))
    }
}

impl Serialize for PubKeyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PubKeyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_round_trip() {
        for kind in PubKeyType::ALL {
            assert_eq!(PubKeyType::from_code(kind.code()), Ok(kind));
            assert_eq!(PubKeyType::try_from(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn test_codes_and_names_unique() {
        let codes: HashSet<u8> = PubKeyType::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), PubKeyType::ALL.len());

        let names: HashSet<&str> = PubKeyType::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), PubKeyType::ALL.len());
    }

    #[test]
    fn test_all_is_in_code_order() {
        let codes: Vec<u8> = PubKeyType::ALL.iter().map(|k| k.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_unallocated_codes_rejected() {
        let allocated: HashSet<u8> = PubKeyType::ALL.iter().map(|k| k.code()).collect();
        for code in 0..=u8::MAX {
            if !allocated.contains(&code) {
                assert_eq!(
                    PubKeyType::from_code(code),
                    Err(DecodeError::UnknownPubKeyType { code })
                );
            }
        }
    }

    #[test]
    fn test_pubkey_lengths() {
        assert_eq!(PubKeyType::MlDsa44.pubkey_len(), 1312);
        assert_eq!(PubKeyType::MlDsa65.pubkey_len(), 1952);
        assert_eq!(PubKeyType::MlDsa87.pubkey_len(), 2592);
        assert_eq!(PubKeyType::SlhDsaSha2_128f.pubkey_len(), 32);
        assert_eq!(PubKeyType::SlhDsaShake192s.pubkey_len(), 48);
        assert_eq!(PubKeyType::SlhDsaShake256f.pubkey_len(), 64);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("MLDSA44".parse::<PubKeyType>().unwrap(), PubKeyType::MlDsa44);
        assert_eq!("ml-dsa-87".parse::<PubKeyType>().unwrap(), PubKeyType::MlDsa87);
        assert_eq!(
            "slh-dsa-sha2-128s".parse::<PubKeyType>().unwrap(),
            PubKeyType::SlhDsaSha2_128s
        );
        assert_eq!(
            "SLHDSA_SHAKE_256F".parse::<PubKeyType>().unwrap(),
            PubKeyType::SlhDsaShake256f
        );
        assert!("falcon-512".parse::<PubKeyType>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&PubKeyType::SlhDsaSha2_192f).unwrap();
        assert_eq!(json, "\"SLHDSA_SHA2_192F\"");
        let kind: PubKeyType = serde_json::from_str("\"ml-dsa-65\"").unwrap();
        assert_eq!(kind, PubKeyType::MlDsa65);
        assert!(serde_json::from_str::<PubKeyType>("\"rsa\"").is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for kind in PubKeyType::ALL {
            assert_eq!(kind.to_string().parse::<PubKeyType>().unwrap(), kind);
        }
    }
}
