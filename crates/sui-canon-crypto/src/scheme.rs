//! The closed set of signature schemes a transaction may be signed with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CryptoError;

/// A supported signature scheme.
///
/// Each scheme has exactly one flag byte and fixed key and signature lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureScheme {
    #[serde(rename = "ED25519")]
    Ed25519,
    Secp256k1,
}

impl SignatureScheme {
    /// Every supported scheme, in flag order.
    pub const ALL: [SignatureScheme; 2] = [SignatureScheme::Ed25519, SignatureScheme::Secp256k1];

    /// The 1-byte protocol flag that leads a serialized signature.
    pub const fn flag(&self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0x00,
            SignatureScheme::Secp256k1 => 0x01,
        }
    }

    /// Raw public key length in bytes (Secp256k1 keys are SEC1 compressed).
    pub const fn public_key_length(&self) -> usize {
        match self {
            SignatureScheme::Ed25519 => 32,
            SignatureScheme::Secp256k1 => 33,
        }
    }

    /// Raw signature length in bytes (Secp256k1 signatures are compact).
    pub const fn signature_length(&self) -> usize {
        match self {
            SignatureScheme::Ed25519 => 64,
            SignatureScheme::Secp256k1 => 64,
        }
    }

    /// Resolve a flag byte.
    pub fn from_flag(flag: u8) -> Result<Self, CryptoError> {
        Self::ALL
            .into_iter()
            .find(|s| s.flag() == flag)
            .ok_or_else(|| CryptoError::UnsupportedScheme(format!("flag {:#04x}", flag)))
    }

    /// Wire name used by the RPC and SDKs.
    pub const fn name(&self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ED25519",
            SignatureScheme::Secp256k1 => "Secp256k1",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureScheme {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CryptoError::UnsupportedScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(SignatureScheme::Ed25519.flag(), 0x00);
        assert_eq!(SignatureScheme::Secp256k1.flag(), 0x01);
        assert_eq!(SignatureScheme::from_flag(0x01).unwrap(), SignatureScheme::Secp256k1);
        assert!(matches!(
            SignatureScheme::from_flag(0x02),
            Err(CryptoError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("ED25519".parse::<SignatureScheme>().unwrap(), SignatureScheme::Ed25519);
        assert_eq!("ed25519".parse::<SignatureScheme>().unwrap(), SignatureScheme::Ed25519);
        assert_eq!("secp256k1".parse::<SignatureScheme>().unwrap(), SignatureScheme::Secp256k1);
        assert_eq!(
            "BLS12381".parse::<SignatureScheme>(),
            Err(CryptoError::UnsupportedScheme("BLS12381".into()))
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SignatureScheme::Ed25519).unwrap();
        assert_eq!(json, "\"ED25519\"");
        let back: SignatureScheme = serde_json::from_str("\"Secp256k1\"").unwrap();
        assert_eq!(back, SignatureScheme::Secp256k1);
    }
}
