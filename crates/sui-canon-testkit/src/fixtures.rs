//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use sui_canon::{Result, SignatureScheme, TransactionData, TransactionDigester};
use sui_canon_core::{ObjectDigest, ObjectRef, SequenceNumber, SuiAddress, TransactionDigest};
use sui_canon_crypto::{
    signable_bytes, Ed25519Keypair, PublicKey, Secp256k1Keypair, SigningEnvelope, TypeTagged,
};

/// A signer of either scheme.
#[derive(Debug, Clone)]
pub enum TestSigner {
    Ed25519(Ed25519Keypair),
    Secp256k1(Secp256k1Keypair),
}

impl TestSigner {
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            TestSigner::Ed25519(_) => SignatureScheme::Ed25519,
            TestSigner::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            TestSigner::Ed25519(kp) => kp.public_key().into(),
            TestSigner::Secp256k1(kp) => kp.public_key().into(),
        }
    }

    /// Sign a message with this signer's scheme.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            TestSigner::Ed25519(kp) => Ok(kp.sign(message).to_vec()),
            TestSigner::Secp256k1(kp) => Ok(kp.sign(message)?.to_vec()),
        }
    }
}

/// A test fixture with a signer and a digester.
pub struct TestFixture {
    pub signer: TestSigner,
    pub digester: TransactionDigester,
}

impl TestFixture {
    /// Ed25519 signer with a random key, verifying digester.
    pub fn new() -> Self {
        Self::with_signer(TestSigner::Ed25519(Ed25519Keypair::generate()))
    }

    /// Ed25519 signer with a deterministic key.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_signer(TestSigner::Ed25519(Ed25519Keypair::from_seed(&seed)))
    }

    /// Secp256k1 signer with a deterministic key.
    pub fn secp256k1(secret: [u8; 32]) -> Result<Self> {
        let keypair = Secp256k1Keypair::from_secret(&secret)?;
        Ok(Self::with_signer(TestSigner::Secp256k1(keypair)))
    }

    pub fn with_signer(signer: TestSigner) -> Self {
        Self {
            signer,
            digester: TransactionDigester::new(sui_canon::DigesterConfig {
                verify_signature: true,
            }),
        }
    }

    /// A fixed sender address for this fixture.
    pub fn sender(&self) -> SuiAddress {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&self.signer.public_key().as_slice()[..20]);
        SuiAddress::from_bytes(bytes)
    }

    /// A gas coin reference owned by the sender.
    pub fn gas(&self, version: u64) -> ObjectRef {
        let mut id = [0u8; 20];
        id[19] = 0x99;
        ObjectRef::new(
            SuiAddress::from_bytes(id),
            SequenceNumber(version),
            ObjectDigest::from_bytes([0x5a; 32]),
        )
    }

    /// A transfer of `amount` to `recipient`.
    pub fn make_transfer(&self, recipient: SuiAddress, amount: u64) -> TransactionData {
        TransactionData::new_transfer_sui(
            recipient,
            self.sender(),
            Some(amount),
            self.gas(1),
            1,
            10_000,
        )
    }

    /// Sign the transaction's tagged canonical bytes.
    pub fn sign(&self, data: &TransactionData) -> Result<Vec<u8>> {
        let bytes = self.digester.canonical_bytes(data)?;
        self.signer
            .sign(&signable_bytes(TransactionData::TYPE_TAG, &bytes))
    }

    /// Sign and build the envelope.
    pub fn envelope(&self, data: &TransactionData) -> Result<SigningEnvelope> {
        let signature = self.sign(data)?;
        self.digester
            .envelope(self.signer.scheme(), signature, self.signer.public_key())
    }

    /// Sign and compute the verified digest.
    pub fn digest(&self, data: &TransactionData) -> Result<TransactionDigest> {
        let signature = self.sign(data)?;
        self.digester
            .digest(data, self.signer.scheme(), signature, self.signer.public_key())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixtures for multi-party tests, alternating schemes.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0x01u8; 32];
            seed[..8].copy_from_slice(&(i as u64 + 1).to_le_bytes());
            if i % 2 == 0 {
                TestFixture::with_seed(seed)
            } else {
                TestFixture::secp256k1(seed).unwrap_or_else(|_| TestFixture::with_seed(seed))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_digest() {
        let fixture = TestFixture::new();
        let data = fixture.make_transfer(SuiAddress::ZERO, 5);

        let digest = fixture.digest(&data).unwrap();
        let bytes = fixture.digester.canonical_bytes(&data).unwrap();
        assert_eq!(digest, fixture.digester.digest_bytes(&bytes));
    }

    #[test]
    fn test_fixture_envelope() {
        let fixture = TestFixture::secp256k1([0x03; 32]).unwrap();
        let data = fixture.make_transfer(SuiAddress::ZERO, 5);

        let envelope = fixture.envelope(&data).unwrap();
        assert_eq!(envelope.scheme(), SignatureScheme::Secp256k1);
        assert_eq!(envelope.len(), 1 + 64 + 33);
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(3);
        let data = parties[0].make_transfer(SuiAddress::ZERO, 1);

        // Same transaction, different signers: same digest.
        let d0 = parties[0].digest(&data).unwrap();
        let d1 = parties[1].digest(&data).unwrap();
        assert_eq!(d0, d1);

        assert_eq!(parties[1].signer.scheme(), SignatureScheme::Secp256k1);
        assert_ne!(parties[0].sender(), parties[2].sender());
    }

    #[test]
    fn test_multi_party_past_one_byte_of_index() {
        let parties = multi_party_fixtures(300);
        assert_eq!(parties.len(), 300);

        let senders: HashSet<_> = parties.iter().map(TestFixture::sender).collect();
        assert_eq!(senders.len(), 300);
        assert_eq!(parties[299].signer.scheme(), SignatureScheme::Secp256k1);
    }
}
