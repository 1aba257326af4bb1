//! Decoded-header display forms.

use std::fmt;

use pow_core::{hash_to_display_hex, BlockHeader};
use serde::Serialize;

/// Human- and JSON-facing view of a decoded block header.
///
/// Integer fields are rendered from their little-endian wire form into
/// ordinary values; the two embedded hashes are shown in reversed
/// (display) byte order.
#[derive(Debug, Serialize)]
pub struct HeaderView {
    pub version: String,
    pub prev_block_hash: String,
    pub merkle_root: String,
    pub timestamp: u32,
    pub bits: String,
    pub nonce: u32,
}

impl From<&BlockHeader> for HeaderView {
    fn from(header: &BlockHeader) -> Self {
        HeaderView {
            version: format!("{:#010x}", header.version),
            prev_block_hash: hash_to_display_hex(&header.prev_block_hash),
            merkle_root: hash_to_display_hex(&header.merkle_root),
            timestamp: header.timestamp,
            bits: format!("{:#010x}", header.bits),
            nonce: header.nonce,
        }
    }
}

impl fmt::Display for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version:             {}", self.version)?;
        writeln!(f, "Previous block hash: {}", self.prev_block_hash)?;
        writeln!(f, "Merkle root:         {}", self.merkle_root)?;
        writeln!(f, "Timestamp:           {}", self.timestamp)?;
        writeln!(f, "Bits (difficulty):   {}", self.bits)?;
        writeln!(f, "Nonce:               {}", self.nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_HEADER_HEX: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c";

    #[test]
    fn test_view_of_genesis_header() {
        let header = BlockHeader::from_hex(GENESIS_HEADER_HEX).unwrap();
        let view = HeaderView::from(&header);

        assert_eq!(view.version, "0x00000001");
        assert_eq!(view.prev_block_hash, "0".repeat(64));
        assert_eq!(
            view.merkle_root,
            "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
        );
        assert_eq!(view.timestamp, 1231006505);
        assert_eq!(view.bits, "0x1d00ffff");
        assert_eq!(view.nonce, 2083236893);
    }

    #[test]
    fn test_view_serializes_to_json() {
        let header = BlockHeader::from_hex(GENESIS_HEADER_HEX).unwrap();
        let json = serde_json::to_string(&HeaderView::from(&header)).unwrap();
        assert!(json.contains("\"bits\":\"0x1d00ffff\""));
        assert!(json.contains("\"nonce\":2083236893"));
    }
}
