//! Types command - list the tag registries

use anyhow::Result;
use pqaddr_lib::{Network, PubKeyType, Version};
use serde::Serialize;

use crate::ui;

/// One row of the public key type listing.
#[derive(Debug, Serialize)]
pub struct PubKeyTypeEntry {
    pub name: &'static str,
    pub code: u8,
    pub family: &'static str,
    pub pubkey_len: usize,
}

/// Every registered network, version and public key type.
#[derive(Debug, Serialize)]
pub struct Registries {
    /// `(name, prefix)` pairs
    pub networks: Vec<(&'static str, &'static str)>,
    /// `(name, code)` pairs
    pub versions: Vec<(&'static str, u8)>,
    /// Public key types in code order
    pub pubkey_types: Vec<PubKeyTypeEntry>,
}

/// Collect the registries in code order.
pub fn registries() -> Registries {
    Registries {
        networks: Network::ALL
            .iter()
            .map(|n| (n.as_str(), n.prefix()))
            .collect(),
        versions: Version::ALL.iter().map(|v| (v.as_str(), v.code())).collect(),
        pubkey_types: PubKeyType::ALL
            .iter()
            .map(|&ty| PubKeyTypeEntry {
                name: ty.as_str(),
                code: ty.code(),
                family: ty.family(),
                pubkey_len: ty.pubkey_len(),
            })
            .collect(),
    }
}

/// Print the registries as tables, or as JSON with `json`.
pub fn run(json: bool) -> Result<()> {
    let registries = registries();
    if json {
        return ui::json(&registries);
    }

    ui::header("Networks");
    for (name, prefix) in &registries.networks {
        ui::key_value(name, prefix);
    }

    ui::header("Versions");
    for (name, code) in &registries.versions {
        ui::key_value(name, &format!("0x{:02x}", code));
    }

    ui::header("Public Key Types");
    for entry in &registries.pubkey_types {
        ui::key_value(
            entry.name,
            &format!("0x{:02x}  {:<7}  {} bytes", entry.code, entry.family, entry.pubkey_len),
        );
    }

    Ok(())
}
