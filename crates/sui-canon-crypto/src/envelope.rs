//! Signing envelopes: `flag || signature || public key`.
//!
//! This is the serialized signature the node's execute-transaction endpoint
//! accepts. The layout is fixed and must match the verifier's.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{CryptoError, Result};
use crate::keys::{Ed25519PublicKey, PublicKey, PublicKeyInitData, Secp256k1PublicKey};
use crate::scheme::SignatureScheme;

/// A signature as raw bytes or base-64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureInput {
    Bytes(Vec<u8>),
    Base64(String),
}

impl SignatureInput {
    /// Resolve to raw bytes. Bad base-64 is an error.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            SignatureInput::Bytes(b) => Ok(b.clone()),
            SignatureInput::Base64(s) => {
                base64::decode(s).map_err(|e| CryptoError::InvalidBase64(e.to_string()))
            }
        }
    }
}

impl From<Vec<u8>> for SignatureInput {
    fn from(bytes: Vec<u8>) -> Self {
        SignatureInput::Bytes(bytes)
    }
}

impl From<&[u8]> for SignatureInput {
    fn from(bytes: &[u8]) -> Self {
        SignatureInput::Bytes(bytes.to_vec())
    }
}

impl From<[u8; 64]> for SignatureInput {
    fn from(bytes: [u8; 64]) -> Self {
        SignatureInput::Bytes(bytes.to_vec())
    }
}

impl From<&str> for SignatureInput {
    fn from(text: &str) -> Self {
        SignatureInput::Base64(text.to_string())
    }
}

impl From<String> for SignatureInput {
    fn from(text: String) -> Self {
        SignatureInput::Base64(text)
    }
}

/// A constructed key, or the material to construct one for the chosen scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyInput {
    Key(PublicKey),
    InitData(PublicKeyInitData),
}

impl PublicKeyInput {
    /// Resolve against `scheme`. A constructed key of another scheme is rejected.
    pub fn resolve(&self, scheme: SignatureScheme) -> Result<PublicKey> {
        match self {
            PublicKeyInput::Key(key) if key.scheme() == scheme => Ok(*key),
            PublicKeyInput::Key(key) => Err(CryptoError::SchemeMismatch {
                expected: scheme,
                actual: key.scheme(),
            }),
            PublicKeyInput::InitData(data) => PublicKey::from_init_data(scheme, data),
        }
    }
}

impl From<PublicKey> for PublicKeyInput {
    fn from(key: PublicKey) -> Self {
        PublicKeyInput::Key(key)
    }
}

impl From<Ed25519PublicKey> for PublicKeyInput {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKeyInput::Key(key.into())
    }
}

impl From<Secp256k1PublicKey> for PublicKeyInput {
    fn from(key: Secp256k1PublicKey) -> Self {
        PublicKeyInput::Key(key.into())
    }
}

impl From<PublicKeyInitData> for PublicKeyInput {
    fn from(data: PublicKeyInitData) -> Self {
        PublicKeyInput::InitData(data)
    }
}

/// A scheme-tagged signature envelope.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningEnvelope {
    bytes: Vec<u8>,
    signature_len: usize,
    public_key: PublicKey,
}

impl SigningEnvelope {
    /// Parse a serialized envelope by its flag and the scheme's fixed lengths.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (&flag, rest) = bytes
            .split_first()
            .ok_or_else(|| CryptoError::MalformedEnvelope("empty".into()))?;
        let scheme = SignatureScheme::from_flag(flag)?;

        let sig_len = scheme.signature_length();
        let expected = sig_len + scheme.public_key_length();
        if rest.len() != expected {
            return Err(CryptoError::MalformedEnvelope(format!(
                "{} envelope body must be {} bytes, got {}",
                scheme,
                expected,
                rest.len()
            )));
        }

        let (signature, pk_bytes) = rest.split_at(sig_len);
        let public_key = PublicKey::from_init_data(scheme, &pk_bytes.into())?;
        Ok(assemble(signature, public_key))
    }

    /// Parse base-64 envelope text.
    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = base64::decode(text).map_err(|e| CryptoError::InvalidBase64(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.public_key.scheme()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total length: `1 + signature + public key`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The signature bytes between the flag and the key.
    pub fn signature(&self) -> &[u8] {
        &self.bytes[1..1 + self.signature_len]
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn to_base64(&self) -> String {
        base64::encode(&self.bytes)
    }
}

impl fmt::Debug for SigningEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningEnvelope({}, {} bytes)", self.scheme(), self.len())
    }
}

impl AsRef<[u8]> for SigningEnvelope {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Build the envelope for `scheme` from a signature and key material.
///
/// The signature is passed through unchanged once decoded; its length is not
/// checked against the scheme.
pub fn build_envelope(
    scheme: SignatureScheme,
    signature: impl Into<SignatureInput>,
    public_key: impl Into<PublicKeyInput>,
) -> Result<SigningEnvelope> {
    let signature = signature.into().to_bytes()?;
    let public_key = public_key.into().resolve(scheme)?;

    let envelope = assemble(&signature, public_key);
    debug!(scheme = %scheme, len = envelope.len(), "built signing envelope");
    trace!(envelope = %hex::encode(envelope.as_bytes()));
    Ok(envelope)
}

fn assemble(signature: &[u8], public_key: PublicKey) -> SigningEnvelope {
    let pk_bytes = public_key.as_slice();
    let mut bytes = Vec::with_capacity(1 + signature.len() + pk_bytes.len());
    bytes.push(public_key.flag());
    bytes.extend_from_slice(signature);
    bytes.extend_from_slice(pk_bytes);

    SigningEnvelope {
        bytes,
        signature_len: signature.len(),
        public_key,
    }
}
