//! # Sui Canon Core
//!
//! Pure canonicalization of on-chain identifiers.
//!
//! This crate contains no I/O and no key material. It turns untrusted text
//! (RPC responses, user input) into fixed-length value types and back.
//!
//! ## Key Types
//!
//! - [`SuiAddress`] / [`ObjectId`] - 20-byte identifiers, canonical `0x` lowercase hex
//! - [`TransactionDigest`] - 32-byte hash, base-58 text form
//! - [`ObjectRef`] - `(object id, version, digest)` triple
//!
//! ## Validation
//!
//! The `is_valid_*` functions never fail; they adapt the richer
//! [`parse_sui_address`] and [`decode_digest`] results to a boolean.

pub mod address;
pub mod config;
pub mod digest;
pub mod error;
pub mod types;

pub use address::{
    is_valid_sui_address, is_valid_sui_object_id, normalize_sui_address, normalize_sui_object_id,
    parse_sui_address, ObjectId, SuiAddress,
};
pub use config::{
    HEX_PREFIX, MOVE_STDLIB_ADDRESS, SUI_ADDRESS_LENGTH, SUI_FRAMEWORK_ADDRESS, TX_DIGEST_LENGTH,
};
pub use digest::{
    decode_digest, encode_digest, is_valid_transaction_digest, ObjectDigest, TransactionDigest,
    TransactionEffectsDigest,
};
pub use error::{AddressError, DigestError};
pub use types::{ObjectOwner, ObjectRef, SequenceNumber};
