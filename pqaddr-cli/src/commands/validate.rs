//! Validate command - check an address and print its canonical form

use anyhow::Result;
use pqaddr_lib::{AddressCodec, DecodeError, EncodeError};

use crate::ui;

/// Why an address failed validation.
#[derive(Debug)]
pub enum Invalid {
    Decode(DecodeError),
    Reencode(EncodeError),
}

impl Invalid {
    /// Numeric code of the underlying error.
    pub fn code(&self) -> i32 {
        match self {
            Self::Decode(e) => e.code().as_i32(),
            Self::Reencode(e) => e.code().as_i32(),
        }
    }
}

impl std::fmt::Display for Invalid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "{}", e),
            Self::Reencode(e) => write!(f, "{}", e),
        }
    }
}

/// Decode `address` and re-encode it into canonical lowercase form.
pub fn canonicalize(codec: &AddressCodec, address: &str) -> Result<String, Invalid> {
    let decoded = codec.decode_address(address.trim()).map_err(Invalid::Decode)?;
    codec
        .encode_pubkey_hash(
            decoded.network,
            decoded.version,
            decoded.pubkey_type,
            decoded.pubkey_hash.as_bytes(),
        )
        .map_err(Invalid::Reencode)
}

/// Returns `Ok(false)` when the address is invalid.
#[tracing::instrument(skip(codec))]
pub fn run(codec: &AddressCodec, address: &str) -> Result<bool> {
    match canonicalize(codec, address) {
        Ok(canonical) => {
            println!("{}", canonical);
            Ok(true)
        }
        Err(invalid) => {
            tracing::debug!(code = invalid.code(), "Address rejected");
            ui::error(&format!("Invalid address (error {}): {}", invalid.code(), invalid));
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqaddr_lib::test_utils::TestFixtures;
    use pqaddr_lib::{encode_address, AddressParams, Network, PubKeyType};

    #[test]
    fn test_canonicalize_lowercases() {
        let key = TestFixtures::pubkey(PubKeyType::MlDsa65, 2);
        let address =
            encode_address(&AddressParams::new(Network::Mainnet, PubKeyType::MlDsa65, &key))
                .unwrap();
        let codec = AddressCodec::standard();

        assert_eq!(canonicalize(&codec, &address.to_ascii_uppercase()).unwrap(), address);
        assert!(run(&codec, &address).unwrap());
    }

    #[test]
    fn test_strict_case_rejects_uppercase() {
        let key = TestFixtures::pubkey(PubKeyType::MlDsa65, 2);
        let address =
            encode_address(&AddressParams::new(Network::Mainnet, PubKeyType::MlDsa65, &key))
                .unwrap();
        let strict = crate::commands::codec(true);

        let invalid = canonicalize(&strict, &address.to_ascii_uppercase()).unwrap_err();
        assert_eq!(invalid.code(), 2001);
    }

    #[test]
    fn test_invalid_address() {
        let codec = AddressCodec::standard();
        let invalid = canonicalize(&codec, "bogus").unwrap_err();
        assert_eq!(invalid.code(), 2001);
        assert!(!run(&codec, "bogus").unwrap());
    }
}
