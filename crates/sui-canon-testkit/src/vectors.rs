//! Golden test vectors for deterministic verification.
//!
//! These pin the identifier formatting and the transaction digest wiring so
//! that any client can check itself against them.

use serde::Serialize;

use sui_canon::{
    is_valid_sui_address, normalize_sui_address, parse_address, Result, SignatureScheme,
    TransactionData, TransactionDigester,
};
use sui_canon_core::{ObjectDigest, ObjectRef, SequenceNumber};
use sui_canon_crypto::{signable_bytes, Ed25519Keypair, TypeTagged};

/// An address normalization case.
#[derive(Debug, Clone, Serialize)]
pub struct AddressVector {
    pub input: &'static str,
    pub force_add_0x: bool,
    pub normalized: &'static str,
    pub valid_after_normalize: bool,
}

/// A transaction digest case.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Seed for the Ed25519 signer.
    pub seed: [u8; 32],
    /// Recipient, in any accepted text form.
    pub recipient: &'static str,
    /// Sender, in any accepted text form.
    pub sender: &'static str,
    /// Amount to transfer, `None` for the whole coin.
    pub amount: Option<u64>,
    pub gas_version: u64,
    pub gas_budget: u64,
    /// Expected digest (base58). Empty means report only.
    pub expected_digest: &'static str,
}

/// Address normalization vectors.
pub fn address_vectors() -> Vec<AddressVector> {
    vec![
        AddressVector {
            input: "ABC",
            force_add_0x: false,
            normalized: "0x0000000000000000000000000000000000000abc",
            valid_after_normalize: true,
        },
        AddressVector {
            input: "0x2",
            force_add_0x: false,
            normalized: "0x0000000000000000000000000000000000000002",
            valid_after_normalize: true,
        },
        AddressVector {
            input: "0xabc",
            force_add_0x: true,
            normalized: "0x000000000000000000000000000000000000xabc",
            valid_after_normalize: false,
        },
        AddressVector {
            input: "0XC2B5625C221264078310A084DF0A3137956D20EE",
            force_add_0x: false,
            normalized: "0xc2b5625c221264078310a084df0a3137956d20ee",
            valid_after_normalize: true,
        },
    ]
}

/// Transaction digest vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "TransferSui with amount",
            seed: [0x42; 32],
            recipient: "0xabc",
            sender: "0x1234",
            amount: Some(42),
            gas_version: 7,
            gas_budget: 10_000,
            expected_digest: "D9qEFkWhmcVnYNRcouTMHYe1wfxHvhwXSKRFxatbG5yP",
        },
        GoldenVector {
            name: "TransferSui whole coin",
            seed: [0x42; 32],
            recipient: "0xabc",
            sender: "0x1234",
            amount: None,
            gas_version: 7,
            gas_budget: 10_000,
            expected_digest: "3T8G9dvdJHGHmf7RLJuH1Q8MYsTcEWevNXda5PzSSLwV",
        },
        GoldenVector {
            name: "TransferSui minimal budget",
            seed: [0x00; 32],
            recipient: "0x1",
            sender: "0x2",
            amount: Some(0),
            gas_version: 0,
            gas_budget: 1,
            expected_digest: "",
        },
    ]
}

/// Build the transaction a vector describes. Gas object `0x99`, digest `[0x5a; 32]`.
///
/// A malformed address in the vector is an error.
pub fn transaction_from_vector(vector: &GoldenVector) -> Result<TransactionData> {
    Ok(TransactionData::new_transfer_sui(
        parse_address(vector.recipient)?,
        parse_address(vector.sender)?,
        vector.amount,
        ObjectRef::new(
            parse_address("0x99")?,
            SequenceNumber(vector.gas_version),
            ObjectDigest::from_bytes([0x5a; 32]),
        ),
        1,
        vector.gas_budget,
    ))
}

/// Compute a vector's digest, signed and verified with the vector's seed.
pub fn digest_from_vector(vector: &GoldenVector) -> String {
    let keypair = Ed25519Keypair::from_seed(&vector.seed);
    let digester = TransactionDigester::new(sui_canon::DigesterConfig {
        verify_signature: true,
    });

    let digest = transaction_from_vector(vector).and_then(|data| {
        let bytes = digester.canonical_bytes(&data)?;
        let signature = keypair.sign(&signable_bytes(TransactionData::TYPE_TAG, &bytes));
        digester.digest(&data, SignatureScheme::Ed25519, signature, keypair.public_key())
    });

    match digest {
        Ok(d) => d.to_string(),
        Err(e) => format!("error: {}", e),
    }
}

/// Verify all golden vectors. Returns `(name, matches, digest)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let digest = digest_from_vector(v);
            let matches = v.expected_digest.is_empty() || digest == v.expected_digest;
            (v.name.to_string(), matches, digest)
        })
        .collect()
}

/// Verify all address vectors. Returns the inputs that failed.
pub fn verify_address_vectors() -> Vec<&'static str> {
    address_vectors()
        .into_iter()
        .filter(|v| {
            let normalized = normalize_sui_address(v.input, v.force_add_0x);
            normalized != v.normalized
                || is_valid_sui_address(&normalized) != v.valid_after_normalize
        })
        .map(|v| v.input)
        .collect()
}

/// All vectors as pretty JSON, for other implementations to consume.
pub fn vectors_json() -> String {
    let digests: Vec<_> = all_vectors()
        .into_iter()
        .map(|v| {
            let digest = digest_from_vector(&v);
            serde_json::json!({ "vector": v, "digest": digest })
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "addresses": address_vectors(),
        "transactions": digests,
    }))
    .unwrap_or_default()
}
