//! # Sui Canon Crypto
//!
//! Signing envelopes and transaction digests.
//!
//! ## Overview
//!
//! - [`SignatureScheme`]: the closed set of schemes, each with a 1-byte flag
//! - [`PublicKey`]: scheme-tagged public keys, plus keypairs for signing
//! - [`build_envelope`]: `flag || signature || public key`
//! - [`CanonicalEncoder`]: deterministic bytes under a named schema, as protocol BCS
//!   ([`BcsEncoder`]) or tag-framed deterministic CBOR ([`CborEncoder`])
//! - [`DomainHasher`] / [`Sha256Hasher`]: hashes bound to a type tag
//! - [`compute_transaction_digest`]: base-58 digest of a [`TransactionData`]
//!
//! ## Usage
//!
//! ```rust
//! use sui_canon_crypto::{
//!     compute_transaction_digest, BcsEncoder, Ed25519Keypair, SignatureScheme, TransactionData,
//! };
//! use sui_canon_core::{ObjectDigest, ObjectRef, SequenceNumber, SuiAddress};
//!
//! let keypair = Ed25519Keypair::from_seed(&[7; 32]);
//! let gas = ObjectRef::new(
//!     SuiAddress::normalized("0x5").unwrap(),
//!     SequenceNumber(1),
//!     ObjectDigest::from_bytes([1; 32]),
//! );
//! let data = TransactionData::new_transfer_sui(
//!     SuiAddress::normalized("0xabc").unwrap(),
//!     SuiAddress::normalized("0x123").unwrap(),
//!     Some(10),
//!     gas,
//!     1,
//!     1000,
//! );
//!
//! let digest = compute_transaction_digest(
//!     &data,
//!     SignatureScheme::Ed25519,
//!     vec![0u8; 64],
//!     keypair.public_key(),
//!     &BcsEncoder::new(),
//! )
//! .unwrap();
//! println!("{}", digest);
//! ```

pub mod canonical;
pub mod digest;
pub mod envelope;
pub mod error;
pub mod hash;
pub mod keys;
pub mod scheme;
pub mod transaction;

pub use canonical::{encode_canonical, BcsEncoder, CanonicalEncoder, CborEncoder, TypeTagged};
pub use digest::{
    compute_transaction_digest, compute_transaction_digest_with, transaction_digest_from_bytes,
    transaction_digest_from_bytes_with,
};
pub use envelope::{build_envelope, PublicKeyInput, SignatureInput, SigningEnvelope};
pub use error::{CryptoError, EncodeError, Result};
pub use hash::{signable_bytes, DomainHasher, Sha256Hasher, TYPE_TAG_SEPARATOR};
pub use keys::{
    Ed25519Keypair, Ed25519PublicKey, PublicKey, PublicKeyInitData, Secp256k1Keypair,
    Secp256k1PublicKey,
};
pub use scheme::SignatureScheme;
pub use transaction::{TransactionData, TransactionKind};
