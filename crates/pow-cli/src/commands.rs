//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pow-cli", about = "Block header tools: decode, hash, mine")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Decode a raw 80-byte block header from hex")]
    Decode {
        #[arg(help = "The 160 hex characters of a serialized header")]
        hex: Option<String>,
        #[arg(long, help = "Read the hex string from the first line of a file")]
        file: Option<PathBuf>,
        #[arg(long, help = "Emit the decoded fields as JSON")]
        json: bool,
    },
    #[command(about = "Print the SHA-256 digest of a string")]
    Hash {
        #[arg(help = "Text to hash")]
        text: String,
    },
    #[command(about = "Search for a nonce meeting the header's difficulty target")]
    Mine {
        #[arg(long, default_value_t = 4)]
        version: u32,
        #[arg(
            long,
            default_value = "00000000000000000002a42bbc873b4423d9bf3a41a470b6876f7eb5cfebdc8e",
            help = "Previous block hash, 64 hex characters in stored byte order"
        )]
        prev_hash: String,
        #[arg(
            long,
            default_value = "041178edb820e2c9447166bdda63de11016bcf8827acc15bb3f2b30ef0c7aa70",
            help = "Merkle root, 64 hex characters in stored byte order"
        )]
        merkle_root: String,
        #[arg(long, default_value_t = 1672700353)]
        timestamp: u32,
        #[arg(
            long,
            default_value = "0x1707f590",
            value_parser = parse_bits,
            help = "Compact difficulty bits, hex"
        )]
        bits: u32,
        #[arg(long, default_value_t = 0, help = "Starting nonce")]
        nonce: u32,
        #[arg(long, default_value_t = 50_000_000)]
        max_attempts: u64,
        #[arg(
            long,
            help = "Zero-fill target bytes above the mantissa instead of 0xFF"
        )]
        zero_fill: bool,
    },
}

/// Parse a compact bits value from hex, with or without a 0x prefix.
pub fn parse_bits(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|err| format!("invalid bits value {s:?}: {err}"))
}
