//! Addresses and object ids: fixed-length identifiers with a canonical hex form.
//!
//! The canonical text form is `0x` followed by exactly `2 * SUI_ADDRESS_LENGTH`
//! lowercase hex characters. Input is accepted in any case, with or without
//! the prefix.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::{HEX_PREFIX, SUI_ADDRESS_LENGTH};
use crate::error::AddressError;

/// A 20-byte Sui address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuiAddress([u8; SUI_ADDRESS_LENGTH]);

/// Object ids share the address namespace and byte length.
pub type ObjectId = SuiAddress;

impl SuiAddress {
    /// The byte length of an address.
    pub const LENGTH: usize = SUI_ADDRESS_LENGTH;

    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; SUI_ADDRESS_LENGTH]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SUI_ADDRESS_LENGTH] {
        &self.0
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Normalize then parse, so short hex such as `0x2` is accepted.
    pub fn normalized(value: &str) -> Result<Self, AddressError> {
        parse_sui_address(&normalize_sui_address(value, false))
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self)
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", HEX_PREFIX, self.to_hex())
    }
}

impl FromStr for SuiAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sui_address(s)
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SUI_ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SuiAddress {
    type Error = AddressError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; SUI_ADDRESS_LENGTH] =
            slice.try_into().map_err(|_| AddressError::InvalidLength {
                expected: SUI_ADDRESS_LENGTH,
                actual: slice.len(),
            })?;
        Ok(Self(arr))
    }
}

/// Text formats get the canonical `0x` string; binary formats get the
/// fixed-width bytes with no length prefix.
impl Serialize for SuiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            parse_sui_address(&s).map_err(serde::de::Error::custom)
        } else {
            <[u8; SUI_ADDRESS_LENGTH]>::deserialize(deserializer).map(Self)
        }
    }
}

/// Format a value as a canonical address string.
///
/// Lower-cases the input, strips one leading `0x` unless `force_add_0x` is
/// set, left-pads with `0` to `2 * SUI_ADDRESS_LENGTH` characters and
/// prepends `0x`. This is a formatter, not a validator: non-hex input and
/// over-long input pass through unchecked.
///
/// If the address text itself begins with `0x` (e.g. `0x0x...`), the caller
/// must pass `force_add_0x = true` to keep it from being stripped.
pub fn normalize_sui_address(value: &str, force_add_0x: bool) -> String {
    let lowered = value.to_lowercase();
    let hex = if force_add_0x {
        lowered.as_str()
    } else {
        lowered.strip_prefix(HEX_PREFIX).unwrap_or(&lowered)
    };

    let width = SUI_ADDRESS_LENGTH * 2;
    let pad = width.saturating_sub(hex.chars().count());

    let mut out = String::with_capacity(HEX_PREFIX.len() + pad + hex.len());
    out.push_str(HEX_PREFIX);
    out.extend(std::iter::repeat('0').take(pad));
    out.push_str(hex);
    out
}

/// Format a value as a canonical object id string. See [`normalize_sui_address`].
pub fn normalize_sui_object_id(value: &str, force_add_0x: bool) -> String {
    normalize_sui_address(value, force_add_0x)
}

/// Strictly parse an address: optional `0x`/`0X`, even-length hex, exactly
/// `SUI_ADDRESS_LENGTH` bytes. No padding is applied.
pub fn parse_sui_address(value: &str) -> Result<SuiAddress, AddressError> {
    let hex = strip_hex_prefix(value);
    if hex.is_empty() {
        return Err(AddressError::Empty);
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex);
    }
    if hex.len() % 2 != 0 {
        return Err(AddressError::OddLength(hex.len()));
    }

    let bytes = hex::decode(hex).map_err(|_| AddressError::InvalidHex)?;
    SuiAddress::try_from(bytes.as_slice())
}

/// Whether `value` is a valid address. Never fails.
pub fn is_valid_sui_address(value: &str) -> bool {
    parse_sui_address(value).is_ok()
}

/// Whether `value` is a valid object id. Identical to [`is_valid_sui_address`].
pub fn is_valid_sui_object_id(value: &str) -> bool {
    is_valid_sui_address(value)
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
