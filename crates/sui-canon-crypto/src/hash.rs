//! Domain-separated hashing.
//!
//! The hash input is `type_tag || "::" || data`, so the same bytes under
//! different tags never produce the same digest.

use sha2::{Digest, Sha256};

use sui_canon_core::TX_DIGEST_LENGTH;

/// Separator between the type tag and the data.
pub const TYPE_TAG_SEPARATOR: &[u8] = b"::";

/// A hash bound to a schema name.
///
/// Implementations create a fresh context per call.
pub trait DomainHasher {
    fn hash(&self, type_tag: &str, data: &[u8]) -> [u8; TX_DIGEST_LENGTH];
}

/// SHA-256 over the tagged message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl DomainHasher for Sha256Hasher {
    fn hash(&self, type_tag: &str, data: &[u8]) -> [u8; TX_DIGEST_LENGTH] {
        let mut hasher = Sha256::new();
        hasher.update(type_tag.as_bytes());
        hasher.update(TYPE_TAG_SEPARATOR);
        hasher.update(data);
        hasher.finalize().into()
    }
}

impl<H: DomainHasher + ?Sized> DomainHasher for &H {
    fn hash(&self, type_tag: &str, data: &[u8]) -> [u8; TX_DIGEST_LENGTH] {
        (**self).hash(type_tag, data)
    }
}

/// The tagged message a signer signs: `type_tag || "::" || data`.
pub fn signable_bytes(type_tag: &str, data: &[u8]) -> Vec<u8> {
    let mut msg = Vec::with_capacity(type_tag.len() + TYPE_TAG_SEPARATOR.len() + data.len());
    msg.extend_from_slice(type_tag.as_bytes());
    msg.extend_from_slice(TYPE_TAG_SEPARATOR);
    msg.extend_from_slice(data);
    msg
}
