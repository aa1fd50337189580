//! Address codec.
//!
//! [`AddressCodec`] composes the tag registries, the payload layout, a
//! [`DigestProvider`] and a [`ChecksummedText`] transform. Either collaborator
//! can be replaced without touching the codec logic.
//!
//! # Example
//!
//! ```
//! use pqaddr_lib::{AddressCodec, AddressParams, Network, PubKeyType};
//!
//! let codec = AddressCodec::standard();
//! let key = vec![7u8; PubKeyType::MlDsa44.pubkey_len()];
//!
//! let address = codec
//!     .encode_address(&AddressParams::new(Network::Mainnet, PubKeyType::MlDsa44, &key))
//!     .unwrap();
//! assert!(address.starts_with("yp1"));
//! assert_eq!(address.len(), 64);
//!
//! let decoded = codec.decode_address(&address).unwrap();
//! assert_eq!(decoded.pubkey_type, PubKeyType::MlDsa44);
//! ```

use crate::payload::AddressPayload;
use crate::{
    AddressParams, Bech32mText, ChecksumError, ChecksummedText, CodecConfig, DecodeError,
    DecodedAddress, DigestProvider, EncodeError, Network, PubKeyType, PubkeyHash, Sha256Digest,
    Version,
};

/// Encoder/decoder for addresses.
///
/// The codec holds no mutable state; one instance can serve any number of
/// concurrent callers.
#[derive(Clone, Debug)]
pub struct AddressCodec<D = Sha256Digest, T = Bech32mText> {
    digest: D,
    text: T,
    config: CodecConfig,
}

impl AddressCodec {
    /// Codec for the canonical profile: the V1 digest (SHA-256), bech32m,
    /// 64-character addresses.
    pub fn standard() -> Self {
        Self::new(Version::V1.digest_provider(), Bech32mText)
    }
}

impl Default for AddressCodec {
    fn default() -> Self {
        Self::standard()
    }
}

impl<D, T> AddressCodec<D, T>
where
    D: DigestProvider,
    T: ChecksummedText,
{
    /// Create a codec from its collaborators with the default configuration.
    pub fn new(digest: D, text: T) -> Self {
        Self {
            digest,
            text,
            config: CodecConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Digest provider used for public keys.
    pub fn digest_provider(&self) -> &D {
        &self.digest
    }

    /// Encode a public key into an address.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidPubkeyLength`] if the key length does not match
    ///   the length registered for its type
    /// - [`EncodeError::ChecksumEncode`] if the text transform rejects the payload
    /// - [`EncodeError::InvalidLength`] if the result is not the configured length
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self, params),
            fields(
                network = %params.network,
                version = %params.version,
                pubkey_type = %params.pubkey_type,
                pubkey_len = params.pubkey_bytes.len(),
            ),
            err
        )
    )]
    pub fn encode_address(&self, params: &AddressParams<'_>) -> Result<String, EncodeError> {
        let expected = params.pubkey_type.pubkey_len();
        if params.pubkey_bytes.len() != expected {
            return Err(EncodeError::InvalidPubkeyLength {
                pubkey_type: params.pubkey_type,
                got: params.pubkey_bytes.len(),
                expected,
            });
        }

        let digest = self.digest.digest(params.pubkey_bytes);
        self.encode_payload(
            params.network,
            params.version,
            params.pubkey_type,
            digest.as_bytes(),
        )
    }

    /// Encode an address from an already computed public key hash.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidHashLength`] if `pubkey_hash` is not the digest
    ///   provider's output length
    /// - otherwise as [`encode_address`](Self::encode_address)
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, pubkey_hash), fields(hash_len = pubkey_hash.len()), err)
    )]
    pub fn encode_pubkey_hash(
        &self,
        network: Network,
        version: Version,
        pubkey_type: PubKeyType,
        pubkey_hash: &[u8],
    ) -> Result<String, EncodeError> {
        let expected = self.digest.output_len();
        if pubkey_hash.len() != expected {
            return Err(EncodeError::InvalidHashLength {
                got: pubkey_hash.len(),
                expected,
            });
        }

        self.encode_payload(network, version, pubkey_type, pubkey_hash)
    }

    /// Decode an address into its components.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::ChecksumDecode`] on checksum mismatch, malformed text,
    ///   or uppercase text when uppercase is not accepted
    /// - [`DecodeError::UnknownPrefix`] if the prefix is not a known network
    /// - [`DecodeError::PayloadTooShort`], [`DecodeError::UnknownVersion`],
    ///   [`DecodeError::UnknownPubKeyType`] from the payload header
    /// - [`DecodeError::InvalidHashLength`] if the digest region has the wrong length
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(len = address.len()), err)
    )]
    pub fn decode_address(&self, address: &str) -> Result<DecodedAddress, DecodeError> {
        if !self.config.accept_uppercase && address.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(DecodeError::ChecksumDecode(ChecksumError::new(
                "uppercase address not accepted",
            )));
        }

        let (prefix, data) = self
            .text
            .decode(address)
            .map_err(DecodeError::ChecksumDecode)?;
        let network = Network::from_prefix(&prefix)?;
        let payload = AddressPayload::unpack(&data)?;

        let expected = self.digest.output_len();
        if payload.digest.len() != expected {
            return Err(DecodeError::InvalidHashLength {
                got: payload.digest.len(),
                expected,
            });
        }

        Ok(DecodedAddress {
            network,
            version: payload.version,
            pubkey_type: payload.pubkey_type,
            pubkey_hash: PubkeyHash::new(payload.digest),
        })
    }

    fn encode_payload(
        &self,
        network: Network,
        version: Version,
        pubkey_type: PubKeyType,
        digest: &[u8],
    ) -> Result<String, EncodeError> {
        let payload = AddressPayload::pack(version, pubkey_type, digest);
        let encoded = self
            .text
            .encode(network.prefix(), payload.as_bytes())
            .map_err(EncodeError::ChecksumEncode)?;

        // Only a registry or digest-length mismatch can trip this.
        if encoded.len() != self.config.address_length {
            return Err(EncodeError::InvalidLength {
                got: encoded.len(),
                expected: self.config.address_length,
            });
        }

        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        assert_decode_fails_with, assert_round_trip, substitute_char, TestFixtures,
        BECH32_CHARSET,
    };
    use crate::AddressErrorCode;

    /// Digest provider truncating SHA-256 to 20 bytes.
    struct ShortDigest;

    impl DigestProvider for ShortDigest {
        fn name(&self) -> &'static str {
            "SHA-256/160"
        }

        fn output_len(&self) -> usize {
            20
        }

        fn digest(&self, data: &[u8]) -> PubkeyHash {
            PubkeyHash::new(&Sha256Digest.digest(data).as_bytes()[..20])
        }
    }

    /// Transform that rejects everything.
    struct FailingText;

    impl ChecksummedText for FailingText {
        fn encode(&self, _prefix: &str, _data: &[u8]) -> Result<String, ChecksumError> {
            Err(ChecksumError::new("encoder offline"))
        }

        fn decode(&self, _text: &str) -> Result<(String, Vec<u8>), ChecksumError> {
            Err(ChecksumError::new("decoder offline"))
        }
    }

    fn key_for(pubkey_type: PubKeyType) -> Vec<u8> {
        (0..pubkey_type.pubkey_len()).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_standard_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AddressCodec>();
        assert_eq!(AddressCodec::default().config(), &CodecConfig::default());
        assert_eq!(AddressCodec::standard().digest_provider().name(), "SHA-256");
    }

    #[test]
    fn test_standard_codec_uses_v1_digest() {
        let codec = AddressCodec::standard();
        assert_eq!(
            codec.digest_provider(),
            &Version::V1.digest_provider()
        );
        assert_eq!(
            codec.digest_provider().output_len(),
            Version::V1.digest_provider().output_len()
        );
    }

    #[test]
    fn test_round_trip() {
        let codec = AddressCodec::standard();
        let key = key_for(PubKeyType::MlDsa65);
        let params = AddressParams::new(Network::Testnet, PubKeyType::MlDsa65, &key);

        let address = codec.encode_address(&params).unwrap();
        assert!(address.starts_with("rh1"));
        assert_eq!(address.len(), 64);

        let decoded = codec.decode_address(&address).unwrap();
        assert_eq!(decoded.network, Network::Testnet);
        assert_eq!(decoded.version, Version::V1);
        assert_eq!(decoded.pubkey_type, PubKeyType::MlDsa65);
        assert_eq!(decoded.pubkey_hash, Sha256Digest.digest(&key));
    }

    #[test]
    fn test_pubkey_length_checked_before_hashing() {
        let codec = AddressCodec::standard();
        let key = vec![0u8; 31];
        let params = AddressParams::new(Network::Mainnet, PubKeyType::SlhDsaSha2_128s, &key);

        assert_eq!(
            codec.encode_address(&params),
            Err(EncodeError::InvalidPubkeyLength {
                pubkey_type: PubKeyType::SlhDsaSha2_128s,
                got: 31,
                expected: 32,
            })
        );
    }

    #[test]
    fn test_length_sanity_check() {
        // A 20-byte digest gives a 22-byte payload and a 45-character address.
        let codec = AddressCodec::new(ShortDigest, Bech32mText);
        let key = key_for(PubKeyType::SlhDsaShake192s);
        let params = AddressParams::new(Network::Mainnet, PubKeyType::SlhDsaShake192s, &key);

        assert_eq!(
            codec.encode_address(&params),
            Err(EncodeError::InvalidLength {
                got: 45,
                expected: 64,
            })
        );

        let codec = codec.with_config(CodecConfig::new().with_address_length(45));
        let address = codec.encode_address(&params).unwrap();
        let decoded = codec.decode_address(&address).unwrap();
        assert_eq!(decoded.pubkey_hash.len(), 20);
    }

    #[test]
    fn test_hash_length_mismatch_on_decode() {
        // A 20-byte digest address is rejected by a SHA-256 codec.
        let short = AddressCodec::new(ShortDigest, Bech32mText)
            .with_config(CodecConfig::new().with_address_length(45));
        let key = key_for(PubKeyType::MlDsa44);
        let address = short
            .encode_address(&AddressParams::new(Network::Mainnet, PubKeyType::MlDsa44, &key))
            .unwrap();

        assert_eq!(
            AddressCodec::standard().decode_address(&address),
            Err(DecodeError::InvalidHashLength {
                got: 20,
                expected: 32,
            })
        );
    }

    #[test]
    fn test_transform_failures_propagate() {
        let codec = AddressCodec::new(Sha256Digest, FailingText);
        let key = key_for(PubKeyType::MlDsa44);
        let params = AddressParams::new(Network::Mainnet, PubKeyType::MlDsa44, &key);

        assert_eq!(
            codec.encode_address(&params),
            Err(EncodeError::ChecksumEncode(ChecksumError::new(
                "encoder offline"
            )))
        );
        assert_eq!(
            codec.decode_address("yp1anything"),
            Err(DecodeError::ChecksumDecode(ChecksumError::new(
                "decoder offline"
            )))
        );
    }

    #[test]
    fn test_encode_pubkey_hash() {
        let codec = AddressCodec::standard();
        let key = key_for(PubKeyType::MlDsa87);
        let params = AddressParams::new(Network::Mainnet, PubKeyType::MlDsa87, &key);
        let address = codec.encode_address(&params).unwrap();

        let hash = Sha256Digest.digest(&key);
        let rebuilt = codec
            .encode_pubkey_hash(
                Network::Mainnet,
                Version::V1,
                PubKeyType::MlDsa87,
                hash.as_bytes(),
            )
            .unwrap();
        assert_eq!(rebuilt, address);

        assert_eq!(
            codec.encode_pubkey_hash(Network::Mainnet, Version::V1, PubKeyType::MlDsa87, &[0; 31]),
            Err(EncodeError::InvalidHashLength {
                got: 31,
                expected: 32,
            })
        );
    }

    #[test]
    fn test_strict_case() {
        let key = key_for(PubKeyType::SlhDsaSha2_256f);
        let params = AddressParams::new(Network::Testnet, PubKeyType::SlhDsaSha2_256f, &key);
        let address = AddressCodec::standard().encode_address(&params).unwrap();
        let upper = address.to_ascii_uppercase();

        let lenient = AddressCodec::standard();
        assert_eq!(
            lenient.decode_address(&upper).unwrap(),
            lenient.decode_address(&address).unwrap()
        );

        let strict = AddressCodec::standard()
            .with_config(CodecConfig::new().with_accept_uppercase(false));
        assert!(strict.decode_address(&address).is_ok());
        assert!(matches!(
            strict.decode_address(&upper),
            Err(DecodeError::ChecksumDecode(_))
        ));
    }

    #[test]
    fn test_every_pair_round_trips() {
        for (network, pubkey_type) in TestFixtures::all_pairs() {
            let key = TestFixtures::pubkey(pubkey_type, 1);
            assert_round_trip(network, pubkey_type, &key);
        }
    }

    #[test]
    fn test_every_single_substitution_is_detected() {
        for network in Network::ALL {
            let key = TestFixtures::pubkey(PubKeyType::SlhDsaShake192f, 9);
            let address = assert_round_trip(network, PubKeyType::SlhDsaShake192f, &key);
            let separator = network.prefix().len();

            for (index, original) in address.char_indices() {
                if index == separator {
                    continue;
                }
                let replacements: Vec<char> = if index < separator {
                    ('a'..='z').collect()
                } else {
                    BECH32_CHARSET.chars().collect()
                };

                for replacement in replacements.into_iter().filter(|&c| c != original) {
                    let tampered = substitute_char(&address, index, replacement);
                    assert_decode_fails_with(&tampered, AddressErrorCode::ChecksumDecode);
                }
            }
        }
    }

    #[test]
    fn test_key_length_boundaries() {
        let codec = AddressCodec::standard();
        for pubkey_type in PubKeyType::ALL {
            let expected = pubkey_type.pubkey_len();
            for delta in [-1, 1] {
                let key = TestFixtures::pubkey_with_len_delta(pubkey_type, delta);
                let params = AddressParams::new(Network::Mainnet, pubkey_type, &key);
                assert_eq!(
                    codec.encode_address(&params),
                    Err(EncodeError::InvalidPubkeyLength {
                        pubkey_type,
                        got: key.len(),
                        expected,
                    })
                );
            }
        }
    }
}
