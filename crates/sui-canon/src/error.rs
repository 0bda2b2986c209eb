//! Error types for the digester.

use sui_canon_core::{AddressError, DigestError};
use sui_canon_crypto::{CryptoError, EncodeError};
use thiserror::Error;

/// Errors that can occur while canonicalizing or digesting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed address or object id.
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Malformed digest text.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// Scheme, key, signature or envelope error.
    #[error("crypto error: {0}")]
    Crypto(CryptoError),

    /// The canonical encoder rejected the value.
    #[error("encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// The signature does not verify against the transaction.
    #[error("signature does not verify for transaction {digest}")]
    InvalidSignature { digest: String },
}

/// Encoder failures surface as [`Error::Encode`] whichever layer reports them.
impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Encode(e) => Error::Encode(e),
            other => Error::Crypto(other),
        }
    }
}

/// Result type for digester operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_errors_unwrapped() {
        let inner = EncodeError::UnknownSchema("TransactionData".into());
        assert_eq!(
            Error::from(CryptoError::Encode(inner.clone())),
            Error::Encode(inner)
        );
        assert_eq!(
            Error::from(CryptoError::InvalidSignature),
            Error::Crypto(CryptoError::InvalidSignature)
        );
    }
}
