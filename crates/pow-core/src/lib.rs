//! SHA-256 engine and block-header proof-of-work core.
//!
//! This crate provides pure Rust implementations of:
//! - SHA-256 (FIPS 180-4) with one-shot and streaming interfaces
//! - Hash hex conversion and double SHA-256
//! - Merkle-root aggregation of ordered transaction hashes
//! - 80-byte block header serialization, decoding, and hashing
//! - Compact difficulty-target decoding and bounded nonce search

pub mod block;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod pow;
pub mod sha256;

pub use block::{BlockHeader, HEADER_SIZE};
pub use difficulty::{decode_target, hash_meets_target, Target, TargetPolicy};
pub use error::{Error, Result};
pub use hash::{
    double_sha256, double_sha256_pair, hash_from_hex, hash_to_display_hex, hash_to_hex, Hash,
};
pub use merkle::compute_merkle_root;
pub use pow::{search_nonce, search_nonce_with_policy, SearchOutcome};
pub use sha256::{sha256, sha256_hex, Sha256};
