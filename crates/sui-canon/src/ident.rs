//! Identifier and digest parsing with facade errors.

use sui_canon_core::{SuiAddress, TransactionDigest};

use crate::error::Result;

/// Parse an address or object id, padding short hex such as `0x2`.
pub fn parse_address(value: &str) -> Result<SuiAddress> {
    Ok(SuiAddress::normalized(value)?)
}

/// Parse base-58 transaction digest text.
pub fn parse_digest(value: &str) -> Result<TransactionDigest> {
    Ok(value.parse()?)
}
