//! Test utilities for pqaddr.
//!
//! This module provides:
//! - Deterministic public key fixtures for every registered key type
//! - Address mutation helpers for tamper testing
//! - Assertion helpers for encode/decode verification
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pqaddr_lib::test_utils::{assert_round_trip, TestFixtures};
//! use pqaddr_lib::{Network, PubKeyType};
//!
//! let key = TestFixtures::pubkey(PubKeyType::MlDsa44, 7);
//! let address = assert_round_trip(Network::Mainnet, PubKeyType::MlDsa44, &key);
//! ```

mod assertions;
mod fixtures;

pub use fixtures::{substitute_char, TestFixtures, BECH32_CHARSET};

pub use assertions::{assert_address_shape, assert_decode_fails_with, assert_round_trip};
