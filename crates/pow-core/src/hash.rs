//! Hash values, hex conversion, and double SHA-256.

use crate::error::{Error, Result};
use crate::sha256::sha256;

/// A 32-byte hash value, stored in natural byte order.
///
/// When rendered as hex or compared as an integer the byte at the highest
/// index is treated as most significant; the bytes themselves are never
/// reordered in storage.
pub type Hash = [u8; 32];

/// Size of a hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Length of a hash rendered as hex.
pub const HASH_HEX_LEN: usize = 64;

/// Parse a 64-character hex string into a hash.
///
/// Any other length is rejected up front; characters that do not parse as
/// hex surface as [`Error::Hex`].
pub fn hash_from_hex(hex_str: &str) -> Result<Hash> {
    if hex_str.len() != HASH_HEX_LEN {
        return Err(Error::HashHexLength(hex_str.len()));
    }
    let mut hash = [0u8; HASH_SIZE];
    hex::decode_to_slice(hex_str, &mut hash)?;
    Ok(hash)
}

/// Render a hash as 64 lowercase hex characters in stored byte order.
pub fn hash_to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Double SHA-256: SHA256(SHA256(data)).
///
/// Used for block header hashing and merkle tree nodes.
#[inline]
pub fn double_sha256(data: &[u8]) -> Hash {
    sha256(&sha256(data))
}

/// Double SHA-256 of two concatenated hashes, as computed at each merkle
/// node.
pub fn double_sha256_pair(left: &Hash, right: &Hash) -> Hash {
    let mut combined = [0u8; 2 * HASH_SIZE];
    combined[..HASH_SIZE].copy_from_slice(left);
    combined[HASH_SIZE..].copy_from_slice(right);
    double_sha256(&combined)
}

/// Reverse the byte order of a hash.
///
/// Block hashes are conventionally displayed in reversed byte order.
#[inline]
pub fn reverse_bytes(hash: &Hash) -> Hash {
    let mut reversed = *hash;
    reversed.reverse();
    reversed
}

/// Render a hash in its display form (reversed hex).
pub fn hash_to_display_hex(hash: &Hash) -> String {
    hex::encode(reverse_bytes(hash))
}
