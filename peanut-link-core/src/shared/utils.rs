//! Utility functions for the link core
//!
//! Address comparison, the native-currency check and the key normalisation
//! used by the gasless lookup.

use std::collections::HashMap;

use crate::shared::constants::{ADDRESS_LENGTH, NATIVE_TOKEN_ADDRESS, NATIVE_TOKEN_SENTINEL};
use crate::shared::error::LinkError;

/// Compare two token addresses ignoring hex case.
pub fn are_token_addresses_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// True for the zero address and the `0xEeee...EEeE` convention.
pub fn is_native_currency(address: &str) -> bool {
    are_token_addresses_equal(address, NATIVE_TOKEN_ADDRESS)
        || are_token_addresses_equal(address, NATIVE_TOKEN_SENTINEL)
}

/// Copy a mapping with every top-level key lowercased. Values are passed
/// through untouched; a missing mapping yields an empty one.
pub fn to_lower_case_keys<V: Clone>(map: Option<&HashMap<String, V>>) -> HashMap<String, V> {
    let mut lowered = HashMap::new();
    if let Some(map) = map {
        for (key, value) in map {
            lowered.insert(key.to_lowercase(), value.clone());
        }
    }
    lowered
}

/// Validate Ethereum address format
pub fn validate_ethereum_address(address: &str) -> Result<(), LinkError> {
    if !address.starts_with("0x") {
        return Err(LinkError::validation("Address must start with 0x"));
    }

    if address.len() != ADDRESS_LENGTH {
        return Err(LinkError::validation("Address must be 42 characters long"));
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LinkError::validation("Address contains invalid hex characters"));
    }

    Ok(())
}

/// Render a human token amount with at most `max_fraction_digits` decimals,
/// dropping trailing zeros.
pub fn format_token_amount(amount: f64, max_fraction_digits: usize) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let formatted = format!("{:.*}", max_fraction_digits, amount);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
