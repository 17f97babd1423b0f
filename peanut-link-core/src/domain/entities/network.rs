//! Chain entity for the link core

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainDetails {
    pub chain_id: u64,
    pub name: String,
    pub native_currency: String,
}

impl ChainDetails {
    pub fn new(chain_id: u64, name: impl Into<String>, native_currency: impl Into<String>) -> Self {
        Self {
            chain_id,
            name: name.into(),
            native_currency: native_currency.into(),
        }
    }
}

/// Display name of a chain, matched on the string form of its id.
pub fn chain_name<'a>(chain_id: &str, chains: &'a [ChainDetails]) -> Option<&'a str> {
    chains
        .iter()
        .find(|chain| chain.chain_id.to_string() == chain_id)
        .map(|chain| chain.name.as_str())
}
