//! Protocol constants shared by every codec.
//!
//! These must match the validator's definitions byte for byte.

use crate::address::SuiAddress;

/// Byte length of an address or object id (the Move account address length).
pub const SUI_ADDRESS_LENGTH: usize = 20;

/// Byte length of a transaction, effects or object digest.
pub const TX_DIGEST_LENGTH: usize = 32;

/// Prefix of the canonical hex text form.
pub const HEX_PREFIX: &str = "0x";

/// 0x1: account address where the Move stdlib modules are stored.
pub const MOVE_STDLIB_ADDRESS: SuiAddress = well_known_address(1);

/// 0x2: account address where the Sui framework modules are stored.
pub const SUI_FRAMEWORK_ADDRESS: SuiAddress = well_known_address(2);

const fn well_known_address(last: u8) -> SuiAddress {
    let mut bytes = [0u8; SUI_ADDRESS_LENGTH];
    bytes[SUI_ADDRESS_LENGTH - 1] = last;
    SuiAddress::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_addresses() {
        assert_eq!(
            MOVE_STDLIB_ADDRESS.to_string(),
            "0x0000000000000000000000000000000000000001"
        );
        assert_eq!(
            SUI_FRAMEWORK_ADDRESS.to_string(),
            "0x0000000000000000000000000000000000000002"
        );
    }
}
