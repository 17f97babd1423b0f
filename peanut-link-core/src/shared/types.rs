use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::constants::{BATCH_VERSION_PREFIX, NORMAL_VERSION_PREFIX, ROUTER_VERSION_PREFIX};
use crate::shared::error::LinkError;

// Basic types for link operations
pub type Address = String;
pub type ChainId = String;
pub type ContractVersion = String;
pub type Amount = String;

/// Token classification reported alongside decimals. Serialized as the
/// integer the link SDK expects: 0 for native, 1 for ERC-20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TokenType {
    Native,
    Erc20,
}

impl TokenType {
    pub fn as_u8(self) -> u8 {
        match self {
            TokenType::Native => 0,
            TokenType::Erc20 => 1,
        }
    }
}

impl From<TokenType> for u8 {
    fn from(token_type: TokenType) -> Self {
        token_type.as_u8()
    }
}

impl TryFrom<u8> for TokenType {
    type Error = LinkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TokenType::Native),
            1 => Ok(TokenType::Erc20),
            other => Err(LinkError::validation(format!("Unknown token type: {}", other))),
        }
    }
}

/// Vault contract family. Each family has its own version line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Normal,
    Batch,
    Router,
}

impl ContractType {
    pub fn version_prefix(self) -> &'static str {
        match self {
            ContractType::Normal => NORMAL_VERSION_PREFIX,
            ContractType::Batch => BATCH_VERSION_PREFIX,
            ContractType::Router => ROUTER_VERSION_PREFIX,
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractType::Normal => write!(f, "normal"),
            ContractType::Batch => write!(f, "batch"),
            ContractType::Router => write!(f, "router"),
        }
    }
}

pub type LinkResult<T> = Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_wire_values() {
        assert_eq!(serde_json::to_string(&TokenType::Native).unwrap(), "0");
        assert_eq!(serde_json::to_string(&TokenType::Erc20).unwrap(), "1");
        assert_eq!(serde_json::from_str::<TokenType>("1").unwrap(), TokenType::Erc20);
        assert!(serde_json::from_str::<TokenType>("2").is_err());
    }

    #[test]
    fn test_contract_type_prefixes() {
        assert_eq!(ContractType::Normal.version_prefix(), "v");
        assert_eq!(ContractType::Batch.version_prefix(), "Bv");
        assert_eq!(ContractType::Router.version_prefix(), "Rv");
        assert_eq!(ContractType::Normal.to_string(), "normal");
    }
}
