//! Public keys and keypairs for the supported signature schemes.
//!
//! [`PublicKey`] is the closed capability the envelope builder dispatches
//! over: every variant exposes its scheme flag and raw bytes.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use secp256k1::ecdsa::Signature as EcdsaSignature;
use secp256k1::{Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::{CryptoError, Result};
use crate::scheme::SignatureScheme;

/// Raw material a public key can be constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyInitData {
    Bytes(Vec<u8>),
    Base64(String),
}

impl PublicKeyInitData {
    /// Resolve to raw bytes, decoding base-64 text if needed.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            PublicKeyInitData::Bytes(b) => Ok(b.clone()),
            PublicKeyInitData::Base64(s) => {
                base64::decode(s).map_err(|e| CryptoError::InvalidBase64(e.to_string()))
            }
        }
    }
}

impl From<Vec<u8>> for PublicKeyInitData {
    fn from(bytes: Vec<u8>) -> Self {
        PublicKeyInitData::Bytes(bytes)
    }
}

impl From<&[u8]> for PublicKeyInitData {
    fn from(bytes: &[u8]) -> Self {
        PublicKeyInitData::Bytes(bytes.to_vec())
    }
}

impl From<&str> for PublicKeyInitData {
    fn from(text: &str) -> Self {
        PublicKeyInitData::Base64(text.to_string())
    }
}

impl From<String> for PublicKeyInitData {
    fn from(text: String) -> Self {
        PublicKeyInitData::Base64(text)
    }
}

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    pub const LENGTH: usize = 32;

    /// Create from raw bytes. Only the length is checked here; the point is
    /// decoded on verification.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidPublicKey(format!(
                "ed25519 key must be {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify a 64-byte signature over a message.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let verifying_key = VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        let sig = DalekSignature::from_slice(signature).map_err(|_| CryptoError::InvalidSignature)?;
        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::InvalidSignature)
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Pub({})", &hex::encode(self.0)[..16])
    }
}

/// A 33-byte compressed Secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    pub const LENGTH: usize = 33;

    /// Create from raw SEC1 compressed bytes. The point must be on the curve.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(CryptoError::InvalidPublicKey(format!(
                "secp256k1 key must be {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            )));
        }
        let point = secp256k1::PublicKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(Self(point.serialize()))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Verify a 64-byte compact ECDSA signature over SHA-256 of the message.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let point = secp256k1::PublicKey::from_slice(&self.0)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        let sig = EcdsaSignature::from_compact(signature).map_err(|_| CryptoError::InvalidSignature)?;
        let msg = Message::from_slice(&Sha256::digest(message))
            .map_err(|_| CryptoError::InvalidSignature)?;
        Secp256k1::verification_only()
            .verify_ecdsa(&msg, &sig, &point)
            .map_err(|_| CryptoError::InvalidSignature)
    }
}

impl fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1Pub({})", &hex::encode(self.0)[..16])
    }
}

/// A public key of one of the supported schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519(Ed25519PublicKey),
    Secp256k1(Secp256k1PublicKey),
}

impl PublicKey {
    /// Construct a key of the given scheme from raw init data.
    pub fn from_init_data(scheme: SignatureScheme, data: &PublicKeyInitData) -> Result<Self> {
        let bytes = data.to_bytes()?;
        match scheme {
            SignatureScheme::Ed25519 => Ed25519PublicKey::from_slice(&bytes).map(Self::Ed25519),
            SignatureScheme::Secp256k1 => {
                Secp256k1PublicKey::from_slice(&bytes).map(Self::Secp256k1)
            }
        }
    }

    pub fn scheme(&self) -> SignatureScheme {
        match self {
            PublicKey::Ed25519(_) => SignatureScheme::Ed25519,
            PublicKey::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    /// The scheme's flag byte.
    pub fn flag(&self) -> u8 {
        self.scheme().flag()
    }

    /// Raw key bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(k) => k.as_bytes(),
            PublicKey::Secp256k1(k) => k.as_bytes(),
        }
    }

    pub fn to_base64(&self) -> String {
        base64::encode(self.as_slice())
    }

    /// Verify a raw signature over a message with this key's scheme.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        match self {
            PublicKey::Ed25519(k) => k.verify(message, signature),
            PublicKey::Secp256k1(k) => k.verify(message, signature),
        }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519(key)
    }
}

impl From<Secp256k1PublicKey> for PublicKey {
    fn from(key: Secp256k1PublicKey) -> Self {
        PublicKey::Secp256k1(key)
    }
}

/// An Ed25519 signing keypair.
#[derive(Clone)]
pub struct Ed25519Keypair {
    signing_key: SigningKey,
}

impl Ed25519Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message. Ed25519 signatures are deterministic.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Keypair({:?})", self.public_key())
    }
}

/// A Secp256k1 signing keypair.
#[derive(Clone)]
pub struct Secp256k1Keypair {
    secret: SecretKey,
}

impl Secp256k1Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        use rand::RngCore;

        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(secret) = SecretKey::from_slice(&bytes) {
                return Self { secret };
            }
        }
    }

    /// Create from a 32-byte secret scalar.
    pub fn from_secret(secret: &[u8; 32]) -> Result<Self> {
        let secret = SecretKey::from_slice(secret).map_err(|_| CryptoError::InvalidSecretKey)?;
        Ok(Self { secret })
    }

    pub fn public_key(&self) -> Secp256k1PublicKey {
        let secp = Secp256k1::signing_only();
        Secp256k1PublicKey(secp256k1::PublicKey::from_secret_key(&secp, &self.secret).serialize())
    }

    /// Sign SHA-256 of the message; returns the 64-byte compact signature.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; 64]> {
        let msg = Message::from_slice(&Sha256::digest(message))
            .map_err(|_| CryptoError::InvalidSignature)?;
        Ok(Secp256k1::signing_only()
            .sign_ecdsa(&msg, &self.secret)
            .serialize_compact())
    }
}

impl fmt::Debug for Secp256k1Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1Keypair({:?})", self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ed25519_sign_verify() {
        let keypair = Ed25519Keypair::generate();
        let signature = keypair.sign(b"hello world");
        let pk = PublicKey::from(keypair.public_key());

        pk.verify(b"hello world", &signature)
            .expect("valid signature should verify");
        assert_eq!(pk.verify(b"hello worlD", &signature), Err(CryptoError::InvalidSignature));
        assert_eq!(pk.verify(b"hello world", &signature[..63]), Err(CryptoError::InvalidSignature));
    }

    #[test]
    fn test_secp256k1_sign_verify() {
        let keypair = Secp256k1Keypair::from_secret(&[0x11; 32]).unwrap();
        let signature = keypair.sign(b"hello world").unwrap();
        let pk = PublicKey::from(keypair.public_key());

        assert_eq!(pk.as_slice().len(), 33);
        pk.verify(b"hello world", &signature).unwrap();
        assert!(pk.verify(b"hello", &signature).is_err());
    }

    #[test]
    fn test_secp256k1_zero_secret_rejected() {
        assert!(matches!(
            Secp256k1Keypair::from_secret(&[0u8; 32]),
            Err(CryptoError::InvalidSecretKey)
        ));
    }

    #[test]
    fn test_ed25519_deterministic_from_seed() {
        let kp1 = Ed25519Keypair::from_seed(&[0x42; 32]);
        let kp2 = Ed25519Keypair::from_seed(&[0x42; 32]);
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.sign(b"msg"), kp2.sign(b"msg"));
    }

    #[test]
    fn test_from_init_data_per_scheme() {
        let ed = Ed25519Keypair::from_seed(&[1; 32]).public_key();
        let from_bytes =
            PublicKey::from_init_data(SignatureScheme::Ed25519, &ed.as_bytes().to_vec().into())
                .unwrap();
        assert_eq!(from_bytes, PublicKey::Ed25519(ed));

        let b64 = base64::encode(ed.as_bytes());
        let from_text =
            PublicKey::from_init_data(SignatureScheme::Ed25519, &b64.as_str().into()).unwrap();
        assert_eq!(from_text, from_bytes);
        assert_eq!(from_text.to_base64(), b64);

        // 32 bytes is the wrong shape for secp256k1.
        assert!(matches!(
            PublicKey::from_init_data(SignatureScheme::Secp256k1, &ed.as_bytes().to_vec().into()),
            Err(CryptoError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_secp256k1_rejects_off_curve_point() {
        let mut bytes = [0xffu8; 33];
        bytes[0] = 0x02;
        assert!(matches!(
            Secp256k1PublicKey::from_slice(&bytes),
            Err(CryptoError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_bad_base64_init_data() {
        assert!(matches!(
            PublicKey::from_init_data(SignatureScheme::Ed25519, &"not base64!".into()),
            Err(CryptoError::InvalidBase64(_))
        ));
    }
}
