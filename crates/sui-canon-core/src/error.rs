//! Error types for the identifier and digest codecs.

use thiserror::Error;

/// Reasons a text value is not a valid address or object id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address contains non-hex characters")]
    InvalidHex,

    #[error("address has an odd number of characters: {0}")]
    OddLength(usize),

    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Reasons a text value is not a valid base-58 digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
