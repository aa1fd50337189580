//! Property-based tests for pqaddr-cli
//!
//! Uses proptest to verify properties hold for arbitrary inputs

use pqaddr_cli::commands::{self, read_pubkey};
use pqaddr_lib::{AddressCodec, Network, PubKeyType, Version};
use proptest::prelude::*;

fn any_pubkey_type() -> impl Strategy<Value = PubKeyType> {
    prop::sample::select(PubKeyType::ALL.to_vec())
}

proptest! {
    /// Test that hex input parses back to the original bytes
    #[test]
    fn test_hex_pubkey_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 0..256),
        prefixed in any::<bool>(),
        upper in any::<bool>()
    ) {
        let mut text = hex::encode(&bytes);
        if upper {
            text = text.to_uppercase();
        }
        if prefixed {
            text = format!("0x{}", text);
        }

        prop_assert_eq!(read_pubkey(Some(&text), None).unwrap(), bytes);
    }

    /// Test that odd-length hex is rejected
    #[test]
    fn test_odd_length_hex_rejected(len in 0usize..100) {
        let text = "a".repeat(len * 2 + 1);
        prop_assert!(read_pubkey(Some(&text), None).is_err());
    }

    /// Test that an encoded address always validates to itself
    #[test]
    fn test_validate_accepts_encoded(
        ty in any_pubkey_type(),
        seed in any::<u8>(),
        testnet in any::<bool>()
    ) {
        let network = if testnet { Network::Testnet } else { Network::Mainnet };
        let key: Vec<u8> = (0..ty.pubkey_len()).map(|i| (i as u8) ^ seed).collect();
        let codec = AddressCodec::standard();

        let output = commands::encode::encode(&codec, network, Version::V1, ty, &key).unwrap();
        let canonical = commands::validate::canonicalize(&codec, &output.address).unwrap();
        prop_assert_eq!(canonical, output.address);
    }

    /// Test that decode never panics on arbitrary text
    #[test]
    fn test_decode_arbitrary_text(text in "\\PC{0,100}") {
        let _ = commands::decode::decode(&commands::codec(false), &text);
    }
}
