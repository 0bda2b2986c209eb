//! Base-58 digests: transaction, effects and object digests.
//!
//! A digest is valid iff its text base-58 decodes and the decoded value is
//! exactly `TX_DIGEST_LENGTH` bytes.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::TX_DIGEST_LENGTH;
use crate::error::DigestError;

/// Decode base-58 digest text to its raw bytes.
pub fn decode_digest(value: &str) -> Result<[u8; TX_DIGEST_LENGTH], DigestError> {
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|e| DigestError::InvalidBase58(e.to_string()))?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| DigestError::InvalidLength {
            expected: TX_DIGEST_LENGTH,
            actual: bytes.len(),
        })
}

/// Encode raw digest bytes as base-58 text.
pub fn encode_digest(bytes: &[u8; TX_DIGEST_LENGTH]) -> String {
    bs58::encode(bytes).into_string()
}

/// Whether `value` is a valid transaction digest. Never fails.
pub fn is_valid_transaction_digest(value: &str) -> bool {
    decode_digest(value).is_ok()
}

/// Binary formats carry a digest as a length-prefixed byte string.
struct DigestBytesVisitor;

impl<'de> Visitor<'de> for DigestBytesVisitor {
    type Value = [u8; TX_DIGEST_LENGTH];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digest bytes", TX_DIGEST_LENGTH)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        v.try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))
    }
}

macro_rules! digest_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; TX_DIGEST_LENGTH]);

        impl $name {
            /// Create from raw bytes.
            pub const fn from_bytes(bytes: [u8; TX_DIGEST_LENGTH]) -> Self {
                Self(bytes)
            }

            /// Get the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; TX_DIGEST_LENGTH] {
                &self.0
            }

            /// Base-58 text form.
            pub fn to_base58(&self) -> String {
                encode_digest(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_base58())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_base58())
            }
        }

        impl FromStr for $name {
            type Err = DigestError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_digest(s).map(Self)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; TX_DIGEST_LENGTH]> for $name {
            fn from(bytes: [u8; TX_DIGEST_LENGTH]) -> Self {
                Self(bytes)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&self.to_base58())
                } else {
                    serializer.serialize_bytes(&self.0)
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                if deserializer.is_human_readable() {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                } else {
                    deserializer.deserialize_bytes(DigestBytesVisitor).map(Self)
                }
            }
        }
    };
}

digest_type!(
    /// Content-addressed identifier of a transaction.
    TransactionDigest
);

digest_type!(
    /// Digest of a transaction's effects.
    TransactionEffectsDigest
);

digest_type!(
    /// Digest of an object's contents at a given version.
    ObjectDigest
);
