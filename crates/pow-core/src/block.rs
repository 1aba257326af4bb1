//! Block header construction, serialization, and hashing.

use crate::error::{Error, Result};
use crate::hash::{double_sha256, Hash, HASH_SIZE};

/// Size of a serialized block header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Original block version.
pub const BLOCK_VERSION_1: u32 = 1;
/// Height-in-coinbase block version (BIP34).
pub const BLOCK_VERSION_2: u32 = 2;
/// Strict-DER block version (BIP66).
pub const BLOCK_VERSION_3: u32 = 3;
/// CHECKLOCKTIMEVERIFY block version (BIP65).
pub const BLOCK_VERSION_4: u32 = 4;

/// An 80-byte block header.
///
/// A plain value type: constructed zeroed via [`Default`], fields set
/// directly. The two embedded hashes are kept in stored (natural) byte
/// order; every integer field serializes little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockHeader {
    /// Block version.
    pub version: u32,
    /// Hash of the previous block (stored byte order).
    pub prev_block_hash: Hash,
    /// Merkle root of the block's transactions (stored byte order).
    pub merkle_root: Hash,
    /// Block timestamp (Unix epoch seconds).
    pub timestamp: u32,
    /// Difficulty target in compact "bits" form.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

#[inline]
fn read_u32_le(raw: &[u8; HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        raw[offset],
        raw[offset + 1],
        raw[offset + 2],
        raw[offset + 3],
    ])
}

impl BlockHeader {
    /// Serialize the header to its 80-byte wire form.
    pub fn serialize(&self) -> [u8; HEADER_SIZE] {
        let mut header = [0u8; HEADER_SIZE];

        header[0..4].copy_from_slice(&self.version.to_le_bytes());
        header[4..36].copy_from_slice(&self.prev_block_hash);
        header[36..68].copy_from_slice(&self.merkle_root);
        header[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        header[72..76].copy_from_slice(&self.bits.to_le_bytes());
        header[76..80].copy_from_slice(&self.nonce.to_le_bytes());

        header
    }

    /// Decode a header from its 80-byte wire form.
    pub fn from_bytes(raw: &[u8; HEADER_SIZE]) -> Self {
        let mut prev_block_hash = [0u8; HASH_SIZE];
        let mut merkle_root = [0u8; HASH_SIZE];
        prev_block_hash.copy_from_slice(&raw[4..36]);
        merkle_root.copy_from_slice(&raw[36..68]);

        BlockHeader {
            version: read_u32_le(raw, 0),
            prev_block_hash,
            merkle_root,
            timestamp: read_u32_le(raw, 68),
            bits: read_u32_le(raw, 72),
            nonce: read_u32_le(raw, 76),
        }
    }

    /// Parse a header from its 160-character hex form.
    ///
    /// Rejects any other length (odd lengths included) before decoding;
    /// non-hex characters surface as [`Error::Hex`].
    pub fn from_hex(hex_header: &str) -> Result<Self> {
        if hex_header.len() != 2 * HEADER_SIZE {
            return Err(Error::HeaderHexLength(hex_header.len()));
        }
        let mut raw = [0u8; HEADER_SIZE];
        hex::decode_to_slice(hex_header, &mut raw)?;
        Ok(Self::from_bytes(&raw))
    }

    /// Compute the block hash: double SHA-256 of the serialized header.
    ///
    /// A pure function of the current field values.
    pub fn block_hash(&self) -> Hash {
        double_sha256(&self.serialize())
    }

    /// Increment the nonce (wrapping at `u32::MAX`) and return the new
    /// block hash.
    ///
    /// Hot path of the nonce search; works entirely in stack buffers.
    pub fn increment_nonce_and_hash(&mut self) -> Hash {
        self.nonce = self.nonce.wrapping_add(1);
        self.block_hash()
    }
}
