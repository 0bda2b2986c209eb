//! Golden test vectors for cross-implementation verification.
//!
//! Every client must produce identical:
//! - canonical transaction bytes (BCS by default, tag-framed CBOR as an alternative)
//! - signing envelope
//! - transaction digest

use serde::Serialize;
use sha2::{Digest, Sha256};

use sui_canon::core::{ObjectDigest, ObjectRef, SequenceNumber};
use sui_canon::crypto::{
    signable_bytes, transaction_digest_from_bytes, CanonicalEncoder, Ed25519Keypair,
    SignatureScheme, TypeTagged,
};
use sui_canon::{
    is_valid_sui_address, is_valid_transaction_digest, normalize_sui_address, CborEncoder,
    DigesterConfig, Sha256Hasher, SigningEnvelope, SuiAddress, TransactionData,
    TransactionDigester,
};

/// A single golden test vector.
#[derive(Debug, Serialize)]
pub struct GoldenVector {
    pub name: String,
    pub seed: String,            // 32 bytes hex
    pub public_key: String,      // 32 bytes hex
    pub tx_bytes: String,        // hex
    pub signature: String,       // 64 bytes hex
    pub envelope: String,        // base64
    pub digest: String,          // base58
}

const SEED: [u8; 32] = [0x42; 32];
const PUBLIC_KEY: &str = "2152f8d19b791d24453242e15f2eab6cb7cffa7b6a5ed30097960e069881db12";

// Protocol BCS, the default encoding.
const TRANSFER_TX_BYTES: &str = "00030000000000000000000000000000000000000abc012a00000000000000000000000000000000000000000000000000123400000000000000000000000000000000000000990700000000000000205a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a01000000000000001027000000000000";
const TRANSFER_DIGEST: &str = "D9qEFkWhmcVnYNRcouTMHYe1wfxHvhwXSKRFxatbG5yP";
const TRANSFER_ALL_DIGEST: &str = "3T8G9dvdJHGHmf7RLJuH1Q8MYsTcEWevNXda5PzSSLwV";
const SIGNATURE: &str = "2c0caa6fea5625d3c5a2ebe2186d0a1602f92aa66d2632c6e763386c665eaca655140209899d6966cb1290c28cb3e2183a3bc48d7c3c76cde62935282c53a207";
const ENVELOPE: &str = "ACwMqm/qViXTxaLr4hhtChYC+SqmbSYyxudjOGxmXqymVRQCCYmdaWbLEpDCjLPiGDo7xI18PHbN5ik1KCxTogchUvjRm3kdJEUyQuFfLqtst8/6e2pe0wCXlg4GmIHbEg==";

// Tag-framed deterministic CBOR.
const CBOR_TRANSFER_TX_BYTES: &str = "826f5472616e73616374696f6e44617461a5646b696e64a16653696e676c65a16b5472616e73666572537569a266616d6f756e74182a69726563697069656e74940000000000000000000000000000000000000a18bc6673656e64657294000000000000000000000000000000000000121834696761735f7072696365016a6761735f6275646765741927106b6761735f7061796d656e74a36664696765737458205a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a6776657273696f6e07696f626a6563745f696494000000000000000000000000000000000000001899";
const CBOR_TRANSFER_DIGEST: &str = "M2WVXhtqP1uX6bo4dJB6otTMANX9iFaJ5u7vCVvuaZs";
const CBOR_TRANSFER_ALL_DIGEST: &str = "9V2ijY39GHDgVSd3A2y9wg7HY4tc9J34y4dRNJaddo6w";
const CBOR_SIGNATURE: &str = "96e2d55407ac40dd5db9271a4afe5f3f7841b00fdc240cba8a8a49d6c214f0468b370a732107933c664af216335c5eabfd0e553f424d19919ae3d548a4ae2205";
const CBOR_ENVELOPE: &str = "AJbi1VQHrEDdXbknGkr+Xz94QbAP3CQMuoqKSdbCFPBGizcKcyEHkzxmSvIWM1xeq/0OVT9CTRmRmuPVSKSuIgUhUvjRm3kdJEUyQuFfLqtst8/6e2pe0wCXlg4GmIHbEg==";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn verifying() -> DigesterConfig {
    DigesterConfig {
        verify_signature: true,
    }
}

fn transfer(amount: Option<u64>) -> TransactionData {
    TransactionData::new_transfer_sui(
        SuiAddress::normalized("0xabc").unwrap(),
        SuiAddress::normalized("0x1234").unwrap(),
        amount,
        ObjectRef::new(
            SuiAddress::normalized("0x99").unwrap(),
            SequenceNumber(7),
            ObjectDigest::from_bytes([0x5a; 32]),
        ),
        1,
        10_000,
    )
}

fn generate_vector<E: CanonicalEncoder>(
    name: &str,
    data: &TransactionData,
    digester: &TransactionDigester<E>,
) -> GoldenVector {
    let keypair = Ed25519Keypair::from_seed(&SEED);

    let tx_bytes = digester.canonical_bytes(data).unwrap();
    let signature = keypair.sign(&signable_bytes(TransactionData::TYPE_TAG, &tx_bytes));
    let envelope = digester
        .envelope(SignatureScheme::Ed25519, signature, keypair.public_key())
        .unwrap();
    let digest = digester
        .digest(data, SignatureScheme::Ed25519, signature, keypair.public_key())
        .unwrap();

    GoldenVector {
        name: name.to_string(),
        seed: hex::encode(SEED),
        public_key: hex::encode(keypair.public_key().as_bytes()),
        tx_bytes: hex::encode(&tx_bytes),
        signature: hex::encode(signature),
        envelope: envelope.to_base64(),
        digest: digest.to_string(),
    }
}

fn bcs_vector(name: &str, data: &TransactionData) -> GoldenVector {
    generate_vector(name, data, &TransactionDigester::new(verifying()))
}

fn cbor_vector(name: &str, data: &TransactionData) -> GoldenVector {
    let digester = TransactionDigester::with_parts(CborEncoder::new(), Sha256Hasher, verifying());
    generate_vector(name, data, &digester)
}

#[test]
fn test_transfer_sui_vector() {
    init_tracing();
    let v = bcs_vector("transfer_sui", &transfer(Some(42)));

    assert_eq!(v.tx_bytes, TRANSFER_TX_BYTES, "canonical bytes mismatch");
    assert_eq!(v.public_key, PUBLIC_KEY, "public key mismatch");
    assert_eq!(v.signature, SIGNATURE, "signature mismatch");
    assert_eq!(v.envelope, ENVELOPE, "envelope mismatch");
    assert_eq!(v.digest, TRANSFER_DIGEST, "digest mismatch");
}

#[test]
fn test_transfer_all_vector() {
    let v = bcs_vector("transfer_sui_all", &transfer(None));
    assert_eq!(v.digest, TRANSFER_ALL_DIGEST);
    assert_ne!(v.digest, TRANSFER_DIGEST);
}

#[test]
fn test_transfer_bytes_decode() {
    let tx_bytes = hex::decode(TRANSFER_TX_BYTES).unwrap();
    let decoded: TransactionData = bcs::from_bytes(&tx_bytes).unwrap();
    assert_eq!(decoded, transfer(Some(42)));
}

#[test]
fn test_cbor_transfer_sui_vector() {
    init_tracing();
    let v = cbor_vector("transfer_sui_cbor", &transfer(Some(42)));

    assert_eq!(v.tx_bytes, CBOR_TRANSFER_TX_BYTES, "canonical bytes mismatch");
    assert_eq!(v.public_key, PUBLIC_KEY, "public key mismatch");
    assert_eq!(v.signature, CBOR_SIGNATURE, "signature mismatch");
    assert_eq!(v.envelope, CBOR_ENVELOPE, "envelope mismatch");
    assert_eq!(v.digest, CBOR_TRANSFER_DIGEST, "digest mismatch");

    let all = cbor_vector("transfer_sui_all_cbor", &transfer(None));
    assert_eq!(all.digest, CBOR_TRANSFER_ALL_DIGEST);
}

#[test]
fn test_digest_from_raw_bytes() {
    // base58(sha256("TransactionData::" || bytes))
    assert_eq!(
        transaction_digest_from_bytes(&[]).to_string(),
        "72Dir1n2ncn9xR718YYexJfBkcVcEB6Vr7zsDHD72LRN"
    );
    assert_eq!(
        transaction_digest_from_bytes(&[0, 1, 2, 3]).to_string(),
        "BvKq9brMyYcpfZdgB5vKgzCmPd7NvyMQbbpwJT63Asea"
    );

    let tx_bytes = hex::decode(TRANSFER_TX_BYTES).unwrap();
    assert_eq!(
        transaction_digest_from_bytes(&tx_bytes).to_string(),
        TRANSFER_DIGEST
    );
    let cbor_bytes = hex::decode(CBOR_TRANSFER_TX_BYTES).unwrap();
    assert_eq!(
        transaction_digest_from_bytes(&cbor_bytes).to_string(),
        CBOR_TRANSFER_DIGEST
    );
}

#[test]
fn test_domain_prefix_exact_bytes() {
    let msg = signable_bytes("TransactionData", b"\x01");
    assert_eq!(msg, b"TransactionData::\x01".to_vec());

    let digest = transaction_digest_from_bytes(b"\x01");
    let expected: [u8; 32] = Sha256::digest(&msg).into();
    assert_eq!(digest.as_bytes(), &expected);
}

#[test]
fn test_envelope_parses_back() {
    let envelope = SigningEnvelope::from_base64(ENVELOPE).unwrap();
    assert_eq!(envelope.scheme(), SignatureScheme::Ed25519);
    assert_eq!(hex::encode(envelope.signature()), SIGNATURE);
    assert_eq!(hex::encode(envelope.public_key().as_slice()), PUBLIC_KEY);
}

#[test]
fn test_vectors_deterministic() {
    let data = transfer(Some(42));
    let v1 = bcs_vector("a", &data);
    let v2 = bcs_vector("a", &data);
    assert_eq!(v1.tx_bytes, v2.tx_bytes);
    assert_eq!(v1.digest, v2.digest);
}

#[test]
fn test_identifier_scenarios() {
    assert_eq!(
        normalize_sui_address("ABC", false),
        "0x0000000000000000000000000000000000000abc"
    );
    assert_eq!(
        normalize_sui_address("0xabc", true),
        "0x000000000000000000000000000000000000xabc"
    );
    assert!(is_valid_sui_address(&normalize_sui_address("ABC", false)));
    assert!(!is_valid_sui_address(&normalize_sui_address("0xabc", true)));
}

#[test]
fn test_digest_scenarios() {
    assert!(is_valid_transaction_digest(TRANSFER_DIGEST));
    // Dropping two characters always loses a byte; one may not.
    assert!(!is_valid_transaction_digest(
        &TRANSFER_DIGEST[..TRANSFER_DIGEST.len() - 2]
    ));
    assert!(!is_valid_transaction_digest(&format!("{}1", TRANSFER_DIGEST)));
    assert!(!is_valid_transaction_digest("0OIl"));
}

#[test]
fn print_golden_vectors_json() {
    let vectors = vec![
        bcs_vector("transfer_sui", &transfer(Some(42))),
        bcs_vector("transfer_sui_all", &transfer(None)),
        cbor_vector("transfer_sui_cbor", &transfer(Some(42))),
        cbor_vector("transfer_sui_all_cbor", &transfer(None)),
    ];
    let json = serde_json::to_string_pretty(&vectors).unwrap();
    println!("{}", json);
}
