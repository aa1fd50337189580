//! Encode command - derive an address from a public key

use anyhow::Result;
use pqaddr_lib::{AddressCodec, AddressParams, Network, PubKeyType, PubkeyHash, Version};
use serde::Serialize;

use crate::ui;

/// Result of an encode, as printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeOutput {
    pub address: String,
    pub network: Network,
    pub version: Version,
    pub pubkey_type: PubKeyType,
    pub pubkey_hash: PubkeyHash,
}

/// Encode `pubkey` and collect everything worth printing.
pub fn encode(
    codec: &AddressCodec,
    network: Network,
    version: Version,
    pubkey_type: PubKeyType,
    pubkey: &[u8],
) -> Result<EncodeOutput> {
    let params = AddressParams::new(network, pubkey_type, pubkey).with_version(version);
    let address = codec
        .encode_address(&params)
        .map_err(|e| anyhow::anyhow!("{} (error {})", e, e.code().as_i32()))?;

    // Hash as embedded in the address.
    let decoded = codec
        .decode_address(&address)
        .map_err(|e| anyhow::anyhow!("{} (error {})", e, e.code().as_i32()))?;

    Ok(EncodeOutput {
        address,
        network: decoded.network,
        version: decoded.version,
        pubkey_type: decoded.pubkey_type,
        pubkey_hash: decoded.pubkey_hash,
    })
}

#[tracing::instrument(skip(codec, pubkey), fields(pubkey_len = pubkey.len()))]
pub fn run(
    codec: &AddressCodec,
    network: Network,
    version: Version,
    pubkey_type: PubKeyType,
    pubkey: &[u8],
    qr: bool,
    json: bool,
) -> Result<()> {
    let output = encode(codec, network, version, pubkey_type, pubkey)?;
    tracing::info!(address = %output.address, "Encoded address");

    if json {
        return ui::json(&output);
    }

    ui::header("Address");
    ui::key_value("Network", output.network.as_str());
    ui::key_value("Version", output.version.as_str());
    ui::key_value("Public Key Type", output.pubkey_type.as_str());
    ui::key_value("Public Key Hash", &output.pubkey_hash.to_hex());
    ui::separator();
    println!("{}", output.address);

    if qr {
        // Uppercase text fits the QR alphanumeric mode.
        ui::qr_code(&output.address.to_ascii_uppercase())?;
        ui::info("The QR code carries the uppercase form, which decodes to the same address");
    }

    Ok(())
}
