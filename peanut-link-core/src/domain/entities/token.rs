//! Token entities for the link core

use serde::{Deserialize, Serialize};

use crate::shared::types::{Address, Amount, ChainId, TokenType};

/// Token entry in the static per-chain registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryToken {
    pub address: Address,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// All registry tokens of one chain. The chain id is numeric here and is
/// compared against callers' string chain ids via `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTokenList {
    pub chain_id: u64,
    pub tokens: Vec<RegistryToken>,
}

/// A balance the caller already knows about, possibly for a custom token the
/// registry has never heard of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBalance {
    pub address: Address,
    pub chain_id: ChainId,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl UserBalance {
    pub fn new(address: impl Into<Address>, chain_id: impl Into<ChainId>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            chain_id: chain_id.into(),
            decimals,
            symbol: None,
            amount: None,
        }
    }
}

/// Result of token resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    #[serde(rename = "tokenDecimals")]
    pub decimals: u8,
    pub token_type: TokenType,
}

/// EIP-712 domain of a token implementing `transferWithAuthorization`.
/// Its presence in the EIP-3009 table marks the token as capable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip3009Domain {
    pub name: String,
    pub version: String,
}
