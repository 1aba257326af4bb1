//! Command-line tools around the proof-of-work core.

mod commands;
mod view;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use pow_core::{
    decode_target, hash_from_hex, hash_to_display_hex, hash_to_hex, search_nonce_with_policy,
    sha256_hex, BlockHeader, TargetPolicy,
};

use commands::{Command, Opt};
use view::HeaderView;

/// Attempts per search chunk between progress reports.
const PROGRESS_INTERVAL: u32 = 1_000_000;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();
    if let Err(err) = run(opt.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Decode { hex, file, json } => decode(hex, file, json),
        Command::Hash { text } => {
            println!("SHA-256 of {text:?}:");
            println!("{}", sha256_hex(text.as_bytes()));
            Ok(())
        }
        Command::Mine {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
            max_attempts,
            zero_fill,
        } => {
            let header = BlockHeader {
                version,
                prev_block_hash: hash_from_hex(&prev_hash)?,
                merkle_root: hash_from_hex(&merkle_root)?,
                timestamp,
                bits,
                nonce,
            };
            let policy = if zero_fill {
                TargetPolicy::ZeroHigh
            } else {
                TargetPolicy::SaturateHigh
            };
            mine(header, max_attempts, policy)
        }
    }
}

fn decode(hex: Option<String>, file: Option<PathBuf>, json: bool) -> Result<(), Box<dyn Error>> {
    let input = match (hex, file) {
        (_, Some(path)) => fs::read_to_string(path)?,
        (Some(hex), None) => hex,
        (None, None) => return Err("expected a hex string or --file".into()),
    };
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let header = BlockHeader::from_hex(&cleaned)?;
    let view = HeaderView::from(&header);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("Raw header ({} hex chars):", cleaned.len());
        println!("{cleaned}");
        println!();
        print!("{view}");
    }
    Ok(())
}

fn mine(
    mut header: BlockHeader,
    max_attempts: u64,
    policy: TargetPolicy,
) -> Result<(), Box<dyn Error>> {
    // Surface an undefined target here instead of silently exhausting.
    let target = decode_target(header.bits, policy)?;

    info!("target:             {}", hash_to_hex(&target));
    info!("initial block hash: {}", hash_to_hex(&header.block_hash()));

    let mut total: u64 = 0;
    let mut remaining = max_attempts;
    while remaining > 0 {
        let chunk = remaining.min(u64::from(PROGRESS_INTERVAL)) as u32;
        let outcome = search_nonce_with_policy(&mut header, chunk, policy);
        total += outcome.attempts;

        if let (Some(nonce), Some(hash)) = (outcome.nonce, outcome.hash) {
            println!("FOUND! nonce = {nonce} after {total} attempts");
            println!("valid hash:   {}", hash_to_hex(&hash));
            println!("display form: {}", hash_to_display_hex(&hash));
            return Ok(());
        }

        remaining -= u64::from(chunk);
        if remaining > 0 {
            info!(
                "attempt {:>10}: nonce = {:<10} no hit yet",
                total, header.nonce
            );
        }
    }

    println!("no valid nonce found in {total} attempts");
    Ok(())
}
