//! Transaction digests.
//!
//! The digest is `base58(hash("TransactionData", canonical bytes))`. The
//! signing envelope is built so that bad signatures and keys are reported,
//! but it is not part of the hash input: the validator derives the digest
//! from the transaction data alone.

use tracing::debug;

use sui_canon_core::TransactionDigest;

use crate::canonical::{CanonicalEncoder, TypeTagged};
use crate::envelope::{build_envelope, PublicKeyInput, SignatureInput};
use crate::error::Result;
use crate::hash::{DomainHasher, Sha256Hasher};
use crate::scheme::SignatureScheme;
use crate::transaction::TransactionData;

/// Compute the digest of a signed transaction with SHA-256.
pub fn compute_transaction_digest<E: CanonicalEncoder>(
    data: &TransactionData,
    scheme: SignatureScheme,
    signature: impl Into<SignatureInput>,
    public_key: impl Into<PublicKeyInput>,
    encoder: &E,
) -> Result<TransactionDigest> {
    compute_transaction_digest_with(data, scheme, signature, public_key, encoder, &Sha256Hasher)
}

/// [`compute_transaction_digest`] with an injected hasher.
pub fn compute_transaction_digest_with<E, H>(
    data: &TransactionData,
    scheme: SignatureScheme,
    signature: impl Into<SignatureInput>,
    public_key: impl Into<PublicKeyInput>,
    encoder: &E,
    hasher: &H,
) -> Result<TransactionDigest>
where
    E: CanonicalEncoder,
    H: DomainHasher + ?Sized,
{
    let _envelope = build_envelope(scheme, signature, public_key)?;

    let tx_bytes = encoder.encode_tagged(data)?;
    let digest = transaction_digest_from_bytes_with(&tx_bytes, hasher);

    debug!(
        scheme = %scheme,
        tx_len = tx_bytes.len(),
        digest = %digest,
        "computed transaction digest"
    );
    Ok(digest)
}

/// Digest of already-serialized transaction bytes.
pub fn transaction_digest_from_bytes(tx_bytes: &[u8]) -> TransactionDigest {
    transaction_digest_from_bytes_with(tx_bytes, &Sha256Hasher)
}

pub fn transaction_digest_from_bytes_with<H: DomainHasher + ?Sized>(
    tx_bytes: &[u8],
    hasher: &H,
) -> TransactionDigest {
    TransactionDigest::from_bytes(hasher.hash(TransactionData::TYPE_TAG, tx_bytes))
}
