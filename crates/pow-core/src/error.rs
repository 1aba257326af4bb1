//! Error types for the proof-of-work core.

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by the proof-of-work core.
///
/// Exhausting a nonce search is not an error; it is reported through
/// [`SearchOutcome`](crate::pow::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A hash hex string was not exactly 64 characters.
    #[error("hash hex string must be 64 characters, got {0}")]
    HashHexLength(usize),

    /// A raw header hex string was not exactly 160 characters.
    #[error("header hex string must be 160 characters, got {0}")]
    HeaderHexLength(usize),

    /// Input contained characters that do not parse as hex.
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Compact bits whose exponent leaves no room for the 3-byte mantissa.
    #[error("compact bits {bits:#010x}: exponent {exponent} leaves no room for the mantissa")]
    UndefinedTarget {
        /// The offending compact bits value.
        bits: u32,
        /// Its exponent byte.
        exponent: u8,
    },
}
