//! The digester: one place that holds the encoder, the hasher and the knobs.

use tracing::{debug, warn};

use sui_canon_core::TransactionDigest;
use sui_canon_crypto::{
    build_envelope, compute_transaction_digest_with, signable_bytes,
    transaction_digest_from_bytes_with, BcsEncoder, CanonicalEncoder, DomainHasher,
    PublicKeyInput, Sha256Hasher, SignatureInput, SignatureScheme, SigningEnvelope,
    TransactionData, TypeTagged,
};

use crate::error::{Error, Result};
use crate::ident::parse_digest;

/// Configuration for the digester.
#[derive(Debug, Clone, Default)]
pub struct DigesterConfig {
    /// Check the signature against the transaction before returning a digest.
    ///
    /// Off by default: the digest does not depend on the signature, and the
    /// validator performs its own check.
    pub verify_signature: bool,
}

/// Computes transaction digests with a fixed encoder and hasher.
pub struct TransactionDigester<E = BcsEncoder, H = Sha256Hasher> {
    encoder: E,
    hasher: H,
    config: DigesterConfig,
}

impl TransactionDigester {
    /// A digester with protocol BCS and SHA-256, matching the validator.
    pub fn new(config: DigesterConfig) -> Self {
        Self::with_parts(BcsEncoder::new(), Sha256Hasher, config)
    }
}

impl Default for TransactionDigester {
    fn default() -> Self {
        Self::new(DigesterConfig::default())
    }
}

impl<E: CanonicalEncoder, H: DomainHasher> TransactionDigester<E, H> {
    /// Create a digester from an encoder and a hasher.
    pub fn with_parts(encoder: E, hasher: H, config: DigesterConfig) -> Self {
        Self {
            encoder,
            hasher,
            config,
        }
    }

    pub fn config(&self) -> &DigesterConfig {
        &self.config
    }

    /// Canonical bytes of the transaction under its schema name.
    pub fn canonical_bytes(&self, data: &TransactionData) -> Result<Vec<u8>> {
        Ok(self.encoder.encode_tagged(data)?)
    }

    /// Build the signing envelope for a signature and key.
    pub fn envelope(
        &self,
        scheme: SignatureScheme,
        signature: impl Into<SignatureInput>,
        public_key: impl Into<PublicKeyInput>,
    ) -> Result<SigningEnvelope> {
        Ok(build_envelope(scheme, signature, public_key)?)
    }

    /// Compute the transaction digest.
    pub fn digest(
        &self,
        data: &TransactionData,
        scheme: SignatureScheme,
        signature: impl Into<SignatureInput>,
        public_key: impl Into<PublicKeyInput>,
    ) -> Result<TransactionDigest> {
        if !self.config.verify_signature {
            return Ok(compute_transaction_digest_with(
                data,
                scheme,
                signature,
                public_key,
                &self.encoder,
                &self.hasher,
            )?);
        }

        let envelope = self.envelope(scheme, signature, public_key)?;
        let tx_bytes = self.canonical_bytes(data)?;
        let digest = transaction_digest_from_bytes_with(&tx_bytes, &self.hasher);

        let message = signable_bytes(TransactionData::TYPE_TAG, &tx_bytes);
        if envelope
            .public_key()
            .verify(&message, envelope.signature())
            .is_err()
        {
            warn!(digest = %digest, scheme = %scheme, "signature rejected");
            return Err(Error::InvalidSignature {
                digest: digest.to_string(),
            });
        }

        debug!(digest = %digest, scheme = %scheme, "verified transaction digest");
        Ok(digest)
    }

    /// Digest of already-serialized transaction bytes.
    pub fn digest_bytes(&self, tx_bytes: &[u8]) -> TransactionDigest {
        transaction_digest_from_bytes_with(tx_bytes, &self.hasher)
    }

    /// Whether `expected` (base-58 text, e.g. as reported by a node) is the
    /// digest of `data`. Malformed text is an error, not a mismatch.
    pub fn matches_digest(&self, data: &TransactionData, expected: &str) -> Result<bool> {
        let expected = parse_digest(expected)?;
        let actual = self.digest_bytes(&self.canonical_bytes(data)?);
        if actual != expected {
            debug!(expected = %expected, actual = %actual, "digest mismatch");
        }
        Ok(actual == expected)
    }
}
