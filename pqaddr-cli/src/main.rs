//! pqaddr CLI
//!
//! Encode, decode and validate post-quantum addresses from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pqaddr_cli::commands;
use pqaddr_lib::{Network, PubKeyType, Version};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pqaddr")]
#[command(about = "Post-quantum address tool - encode and check ML-DSA / SLH-DSA addresses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject uppercase addresses when decoding
    #[arg(long, global = true)]
    strict_case: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive an address from a public key
    Encode {
        /// Public key type (e.g. MLDSA44, SLHDSA_SHA2_128S, ml-dsa-65)
        #[arg(short = 't', long)]
        pubkey_type: PubKeyType,

        /// Public key as hex
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        hex: Option<String>,

        /// File containing the raw public key bytes
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Network (mainnet or testnet)
        #[arg(short, long, env = "PQADDR_NETWORK", default_value = "mainnet")]
        network: Network,

        /// Address format version
        #[arg(long, default_value = "V1")]
        address_version: Version,

        /// Also render the address as a QR code
        #[arg(long)]
        qr: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the components of an address
    Decode {
        /// Address to decode
        address: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check an address and print its canonical form
    Validate {
        /// Address to validate
        address: String,
    },

    /// List networks, versions and public key types
    Types {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pqaddr_cli=debug,pqaddr_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pqaddr_cli=info,pqaddr_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let codec = commands::codec(cli.strict_case);

    match cli.command {
        Commands::Encode {
            pubkey_type,
            hex,
            file,
            network,
            address_version,
            qr,
            json,
        } => {
            let pubkey = commands::read_pubkey(hex.as_deref(), file.as_deref())?;
            commands::encode::run(
                &codec,
                network,
                address_version,
                pubkey_type,
                &pubkey,
                qr,
                json,
            )?;
        }
        Commands::Decode { address, json } => {
            commands::decode::run(&codec, &address, json)?;
        }
        Commands::Validate { address } => {
            if !commands::validate::run(&codec, &address)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Types { json } => {
            commands::types::run(json)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
