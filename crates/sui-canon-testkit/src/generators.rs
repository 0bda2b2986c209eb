//! Proptest generators for property-based testing.

use proptest::prelude::*;

use sui_canon_core::{
    ObjectDigest, ObjectRef, SequenceNumber, SuiAddress, TransactionDigest, SUI_ADDRESS_LENGTH,
    TX_DIGEST_LENGTH,
};
use sui_canon_crypto::{Ed25519Keypair, SignatureScheme, TransactionData, TransactionKind};

/// Generate a random Ed25519 keypair.
pub fn ed25519_keypair() -> impl Strategy<Value = Ed25519Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Ed25519Keypair::from_seed(&seed))
}

/// Generate a random address.
pub fn sui_address() -> impl Strategy<Value = SuiAddress> {
    any::<[u8; SUI_ADDRESS_LENGTH]>().prop_map(SuiAddress::from_bytes)
}

/// Address text as a user might type it: optional prefix, mixed case, short.
pub fn address_text() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9a-fA-F]{1,40}").prop_map(|(prefixed, hex)| {
        if prefixed {
            format!("0x{}", hex)
        } else {
            hex
        }
    })
}

/// Generate a random object digest.
pub fn object_digest() -> impl Strategy<Value = ObjectDigest> {
    any::<[u8; TX_DIGEST_LENGTH]>().prop_map(ObjectDigest::from_bytes)
}

/// Generate a random transaction digest.
pub fn transaction_digest() -> impl Strategy<Value = TransactionDigest> {
    any::<[u8; TX_DIGEST_LENGTH]>().prop_map(TransactionDigest::from_bytes)
}

/// Generate an object reference.
pub fn object_ref() -> impl Strategy<Value = ObjectRef> {
    (sui_address(), any::<u64>(), object_digest())
        .prop_map(|(id, version, digest)| ObjectRef::new(id, SequenceNumber(version), digest))
}

/// Generate a signature scheme.
pub fn signature_scheme() -> impl Strategy<Value = SignatureScheme> {
    prop_oneof![Just(SignatureScheme::Ed25519), Just(SignatureScheme::Secp256k1)]
}

/// Generate a transaction kind.
pub fn transaction_kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        (sui_address(), object_ref()).prop_map(|(recipient, object_ref)| {
            TransactionKind::TransferObject {
                recipient,
                object_ref,
            }
        }),
        (sui_address(), any::<Option<u64>>())
            .prop_map(|(recipient, amount)| TransactionKind::TransferSui { recipient, amount }),
        (
            prop::collection::vec(object_ref(), 1..4),
            prop::collection::vec((sui_address(), any::<u64>()), 1..4),
        )
            .prop_map(|(coins, pays)| {
                let (recipients, amounts) = pays.into_iter().unzip();
                TransactionKind::Pay {
                    coins,
                    recipients,
                    amounts,
                }
            }),
    ]
}

/// Generate transaction data.
pub fn transaction_data() -> impl Strategy<Value = TransactionData> {
    (
        transaction_kind(),
        sui_address(),
        object_ref(),
        1u64..=1_000,
        1u64..=u64::MAX,
    )
        .prop_map(|(kind, sender, gas, price, budget)| {
            TransactionData::new(kind, sender, gas, price, budget)
        })
}
