//! # Sui Canon
//!
//! Canonical on-chain identifiers and transaction digests for Sui clients.
//!
//! ## Overview
//!
//! - **Identifiers**: addresses and object ids, normalized to `0x` + 40
//!   lowercase hex characters
//! - **Digests**: 32-byte hashes in base-58 text form
//! - **Envelopes**: `flag || signature || public key`, the serialized
//!   signature a node accepts
//! - **Transaction digests**: `base58(sha256("TransactionData::" || canonical bytes))`,
//!   where the canonical bytes are the protocol's BCS encoding by default
//!
//! Everything here is a pure function of its inputs. There is no network
//! I/O and no key storage.
//!
//! ## Usage
//!
//! ```rust
//! use sui_canon::{normalize_sui_address, is_valid_sui_address, is_valid_transaction_digest};
//!
//! let address = normalize_sui_address("0x2", false);
//! assert!(is_valid_sui_address(&address));
//! assert!(!is_valid_transaction_digest("not-a-digest"));
//! ```
//!
//! Computing a digest:
//!
//! ```rust
//! use sui_canon::{DigesterConfig, TransactionDigester};
//! use sui_canon::crypto::{Ed25519Keypair, SignatureScheme, TransactionData};
//! use sui_canon::core::{ObjectDigest, ObjectRef, SequenceNumber, SuiAddress};
//!
//! let keypair = Ed25519Keypair::from_seed(&[1; 32]);
//! let data = TransactionData::new_transfer_sui(
//!     SuiAddress::normalized("0xabc").unwrap(),
//!     SuiAddress::normalized("0x123").unwrap(),
//!     None,
//!     ObjectRef::new(
//!         SuiAddress::normalized("0x5").unwrap(),
//!         SequenceNumber(1),
//!         ObjectDigest::from_bytes([0; 32]),
//!     ),
//!     1,
//!     1000,
//! );
//!
//! let digester = TransactionDigester::new(DigesterConfig::default());
//! let digest = digester
//!     .digest(&data, SignatureScheme::Ed25519, vec![0u8; 64], keypair.public_key())
//!     .unwrap();
//! assert!(sui_canon::is_valid_transaction_digest(&digest.to_string()));
//! ```
//!
//! ## Re-exports
//!
//! - `sui_canon::core` - identifier and digest codecs
//! - `sui_canon::crypto` - schemes, keys, envelopes, encoder and hasher

pub mod digester;
pub mod error;
pub mod ident;

pub use sui_canon_core as core;
pub use sui_canon_crypto as crypto;

pub use digester::{DigesterConfig, TransactionDigester};
pub use error::{Error, Result};
pub use ident::{parse_address, parse_digest};

pub use sui_canon_core::{
    decode_digest, encode_digest, is_valid_sui_address, is_valid_sui_object_id,
    is_valid_transaction_digest, normalize_sui_address, normalize_sui_object_id,
    parse_sui_address, ObjectId, SuiAddress, TransactionDigest, SUI_ADDRESS_LENGTH,
    TX_DIGEST_LENGTH,
};
pub use sui_canon_crypto::{
    build_envelope, compute_transaction_digest, BcsEncoder, CborEncoder, PublicKey, Sha256Hasher,
    SignatureScheme, SigningEnvelope, TransactionData,
};
