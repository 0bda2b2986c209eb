//! Error types for signing envelopes and transaction digests.

use thiserror::Error;

use crate::scheme::SignatureScheme;

/// Failures at the canonical encoder boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("unknown schema: {0}")]
    UnknownSchema(String),

    #[error("schema mismatch for {tag}: registered as {expected}, got {actual}")]
    SchemaMismatch {
        tag: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unsupported value in canonical encoding: {0}")]
    Unsupported(String),

    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Errors from envelope building and digest computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("unsupported signature scheme: {0}")]
    UnsupportedScheme(String),

    #[error("public key is for {actual}, expected {expected}")]
    SchemeMismatch {
        expected: SignatureScheme,
        actual: SignatureScheme,
    },

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("encoding error: {0}")]
    Encode(#[from] EncodeError),
}

/// Result type for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
