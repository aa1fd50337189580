//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod types;
pub mod validate;

use anyhow::{bail, Context, Result};
use pqaddr_lib::{AddressCodec, CodecConfig};
use std::path::Path;

/// Build the codec used by every command.
pub fn codec(strict_case: bool) -> AddressCodec {
    AddressCodec::standard().with_config(CodecConfig::new().with_accept_uppercase(!strict_case))
}

/// Load public key bytes from a hex argument or a file.
///
/// Hex may carry a `0x` prefix and surrounding whitespace. Files are read as
/// raw bytes.
pub fn read_pubkey(hex_arg: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    match (hex_arg, file) {
        (Some(text), None) => {
            let text = text.trim();
            let text = text.strip_prefix("0x").unwrap_or(text);
            hex::decode(text).context("Public key is not valid hex")
        }
        (None, Some(path)) => std::fs::read(path)
            .with_context(|| format!("Failed to read public key from {}", path.display())),
        (Some(_), Some(_)) => bail!("Pass either --hex or --file, not both"),
        (None, None) => bail!("A public key is required: pass --hex or --file"),
    }
}
