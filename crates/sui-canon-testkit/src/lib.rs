//! # Sui Canon Testkit
//!
//! Testing utilities for sui-canon.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected digests for cross-client verification
//! - **Generators**: Proptest strategies for addresses, digests and transactions
//! - **Fixtures**: Signers and a verifying digester for test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use sui_canon_testkit::vectors::{all_vectors, digest_from_vector};
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, digest_from_vector(&vector));
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use sui_canon::TransactionDigester;
//! use sui_canon_testkit::generators::transaction_data;
//!
//! proptest! {
//!     #[test]
//!     fn canonical_bytes_are_deterministic(data in transaction_data()) {
//!         let digester = TransactionDigester::default();
//!         prop_assert_eq!(
//!             digester.canonical_bytes(&data).unwrap(),
//!             digester.canonical_bytes(&data).unwrap()
//!         );
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use sui_canon::SuiAddress;
//! use sui_canon_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed([7; 32]);
//! let data = fixture.make_transfer(SuiAddress::ZERO, 10);
//! let digest = fixture.digest(&data).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture, TestSigner};
pub use generators::{object_ref, sui_address, transaction_data};
pub use vectors::{all_vectors, digest_from_vector, verify_all_vectors, GoldenVector};
