//! Decode command - show the components of an address

use anyhow::Result;
use pqaddr_lib::{AddressCodec, DecodedAddress};

use crate::ui;

/// Decode `address`, attaching the numeric error code on failure.
pub fn decode(codec: &AddressCodec, address: &str) -> Result<DecodedAddress> {
    codec
        .decode_address(address.trim())
        .map_err(|e| anyhow::anyhow!("{} (error {})", e, e.code().as_i32()))
}

#[tracing::instrument(skip(codec))]
pub fn run(codec: &AddressCodec, address: &str, json: bool) -> Result<()> {
    let decoded = decode(codec, address)?;
    tracing::debug!(pubkey_type = %decoded.pubkey_type, "Decoded address");

    if json {
        return ui::json(&decoded);
    }

    ui::header("Decoded Address");
    ui::key_value("Network", decoded.network.as_str());
    ui::key_value("Prefix", decoded.network.prefix());
    ui::key_value("Version", decoded.version.as_str());
    ui::key_value(
        "Public Key Type",
        &format!(
            "{} (0x{:02x}, {})",
            decoded.pubkey_type,
            decoded.pubkey_type.code(),
            decoded.pubkey_type.family()
        ),
    );
    ui::key_value("Public Key Hash", &decoded.pubkey_hash_hex());

    Ok(())
}
