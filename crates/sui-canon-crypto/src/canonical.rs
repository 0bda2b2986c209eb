//! Canonical encoder boundary.
//!
//! Two encoders sit behind [`CanonicalEncoder`]:
//!
//! - [`BcsEncoder`] emits the protocol's BCS bytes, the form a validator
//!   decodes and hashes. The output carries no tag; tag separation for BCS
//!   comes from the hasher, which prefixes the tag before hashing.
//! - [`CborEncoder`] implements RFC 8949 Core Deterministic Encoding and
//!   wraps every value as the array `[tag, value]`, so output under different
//!   tags never collides:
//!   - Map keys sorted by encoded byte comparison
//!   - Integers use smallest valid encoding
//!   - Definite lengths only
//!   - No floats, no tags
//!
//! Every type tag is bound to exactly one Rust type in the encoder's schema
//! registry. Encoding a value under a tag it is not registered for fails.

use ciborium::value::{Integer, Value};
use serde::Serialize;
use std::any::{type_name, TypeId};
use std::collections::BTreeMap;

use tracing::{trace, warn};

use crate::error::EncodeError;
use crate::transaction::TransactionData;

/// A value with a fixed schema name.
pub trait TypeTagged: Serialize + 'static {
    const TYPE_TAG: &'static str;
}

/// Deterministic encoding of structured values under a named schema.
///
/// Equal values under the same tag encode to identical bytes. Whether the tag
/// itself appears in the output is up to the encoder; the digest path always
/// feeds the tag to the hasher as well.
pub trait CanonicalEncoder {
    fn encode<T: Serialize + 'static>(&self, type_tag: &str, value: &T)
        -> Result<Vec<u8>, EncodeError>;

    /// Encode under the value's own schema name.
    fn encode_tagged<T: TypeTagged>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        self.encode(T::TYPE_TAG, value)
    }
}

impl<E: CanonicalEncoder + ?Sized> CanonicalEncoder for &E {
    fn encode<T: Serialize + 'static>(
        &self,
        type_tag: &str,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(type_tag, value)
    }
}

#[derive(Debug, Clone, Copy)]
struct Schema {
    type_id: TypeId,
    type_name: &'static str,
}

/// Tag to type bindings shared by the encoders.
#[derive(Debug, Clone, Default)]
struct SchemaRegistry {
    schemas: BTreeMap<String, Schema>,
}

impl SchemaRegistry {
    fn register<T: 'static>(&mut self, type_tag: &str) {
        self.schemas.insert(
            type_tag.to_string(),
            Schema {
                type_id: TypeId::of::<T>(),
                type_name: type_name::<T>(),
            },
        );
    }

    fn contains(&self, type_tag: &str) -> bool {
        self.schemas.contains_key(type_tag)
    }

    /// `Ok` iff `type_tag` is bound to `T`.
    fn check<T: 'static>(&self, type_tag: &str) -> Result<(), EncodeError> {
        let schema = self.schemas.get(type_tag).ok_or_else(|| {
            warn!(type_tag, "no schema registered");
            EncodeError::UnknownSchema(type_tag.to_string())
        })?;

        if schema.type_id != TypeId::of::<T>() {
            warn!(type_tag, expected = schema.type_name, "schema mismatch");
            return Err(EncodeError::SchemaMismatch {
                tag: type_tag.to_string(),
                expected: schema.type_name,
                actual: type_name::<T>(),
            });
        }
        Ok(())
    }
}

macro_rules! schema_builders {
    ($name:ident) => {
        impl $name {
            /// An encoder with no schemas registered.
            pub fn empty() -> Self {
                Self {
                    registry: SchemaRegistry::default(),
                }
            }

            /// An encoder with the transaction schemas registered.
            pub fn new() -> Self {
                Self::empty().with_tagged::<TransactionData>()
            }

            /// Bind `type_tag` to `T`, replacing any previous binding.
            pub fn register<T: 'static>(&mut self, type_tag: &str) {
                self.registry.register::<T>(type_tag);
            }

            pub fn with_schema<T: 'static>(mut self, type_tag: &str) -> Self {
                self.register::<T>(type_tag);
                self
            }

            pub fn with_tagged<T: TypeTagged>(self) -> Self {
                self.with_schema::<T>(T::TYPE_TAG)
            }

            pub fn has_schema(&self, type_tag: &str) -> bool {
                self.registry.contains(type_tag)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// BCS behind a schema registry. The digest default.
#[derive(Debug, Clone)]
pub struct BcsEncoder {
    registry: SchemaRegistry,
}

schema_builders!(BcsEncoder);

impl CanonicalEncoder for BcsEncoder {
    fn encode<T: Serialize + 'static>(
        &self,
        type_tag: &str,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        self.registry.check::<T>(type_tag)?;

        let bytes = bcs::to_bytes(value).map_err(|e| EncodeError::Serialize(e.to_string()))?;
        trace!(type_tag, len = bytes.len(), "bcs encoding");
        Ok(bytes)
    }
}

/// Deterministic CBOR behind a schema registry.
#[derive(Debug, Clone)]
pub struct CborEncoder {
    registry: SchemaRegistry,
}

schema_builders!(CborEncoder);

impl CanonicalEncoder for CborEncoder {
    fn encode<T: Serialize + 'static>(
        &self,
        type_tag: &str,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        self.registry.check::<T>(type_tag)?;

        let value =
            Value::serialized(value).map_err(|e| EncodeError::Serialize(e.to_string()))?;
        let framed = Value::Array(vec![Value::Text(type_tag.to_string()), value]);
        let bytes = encode_canonical(&framed)?;
        trace!(type_tag, len = bytes.len(), "canonical encoding");
        Ok(bytes)
    }
}

/// Encode a CBOR value to canonical bytes.
pub fn encode_canonical(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value)?;
    Ok(buf)
}

fn encode_value_to(buf: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Array(arr) => encode_array(buf, arr)?,
        Value::Map(entries) => encode_map_canonical(buf, entries)?,
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Float(_) => return Err(EncodeError::Unsupported("float".into())),
        Value::Tag(tag, _) => return Err(EncodeError::Unsupported(format!("tag {}", tag))),
        _ => return Err(EncodeError::Unsupported("unknown value kind".into())),
    }
    Ok(())
}

/// Major types 0 and 1.
fn encode_integer(buf: &mut Vec<u8>, i: Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // -1 encodes as 0, -2 as 1, ...
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Unsigned argument with the given major type, shortest form.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

fn encode_array(buf: &mut Vec<u8>, arr: &[Value]) -> Result<(), EncodeError> {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item)?;
    }
    Ok(())
}

/// Major type 5, keys sorted by their encoded bytes.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) -> Result<(), EncodeError> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, k)?;
        pairs.push((key_buf, v));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    if pairs.windows(2).any(|w| w[0].0 == w[1].0) {
        return Err(EncodeError::Unsupported("duplicate map key".into()));
    }

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value)?;
    }
    Ok(())
}
