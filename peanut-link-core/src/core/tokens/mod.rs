//! Token resolution
//!
//! Works out how many decimals a token uses and whether it is the chain's
//! native currency. Balances the caller already holds take precedence over the
//! static registry, which in turn beats the 18-decimal default.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ChainTokenList, RegistryToken, TokenDetails, UserBalance};
use crate::shared::constants::DEFAULT_TOKEN_DECIMALS;
use crate::shared::types::TokenType;
use crate::shared::utils::{are_token_addresses_equal, is_native_currency};

/// Decides whether an address denotes the native currency of a chain.
#[cfg_attr(test, mockall::automock)]
pub trait NativeCurrencyCheck: Send + Sync {
    fn is_native_currency(&self, token_address: &str, chain_id: &str) -> bool;
}

/// Recognises the zero address and the `0xEeee...EEeE` marker on every chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentinelNativeCurrency;

impl NativeCurrencyCheck for SentinelNativeCurrency {
    fn is_native_currency(&self, token_address: &str, _chain_id: &str) -> bool {
        is_native_currency(token_address)
    }
}

/// Static per-chain token registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenRegistry {
    chains: Vec<ChainTokenList>,
}

impl TokenRegistry {
    pub fn new(chains: Vec<ChainTokenList>) -> Self {
        Self { chains }
    }

    pub fn chains(&self) -> &[ChainTokenList] {
        &self.chains
    }

    pub fn chain(&self, chain_id: &str) -> Option<&ChainTokenList> {
        self.chains
            .iter()
            .find(|chain| chain.chain_id.to_string() == chain_id)
    }

    pub fn find_token(&self, token_address: &str, chain_id: &str) -> Option<&RegistryToken> {
        self.chain(chain_id)?
            .tokens
            .iter()
            .find(|token| are_token_addresses_equal(&token.address, token_address))
    }
}

/// Resolves token decimals and type against a registry.
pub struct TokenResolver<'a> {
    registry: &'a TokenRegistry,
    native: &'a dyn NativeCurrencyCheck,
}

impl<'a> TokenResolver<'a> {
    pub fn new(registry: &'a TokenRegistry, native: &'a dyn NativeCurrencyCheck) -> Self {
        Self { registry, native }
    }

    /// Never fails: an unknown token resolves to 18 decimals.
    pub fn resolve_token_details(
        &self,
        token_address: &str,
        chain_id: &str,
        user_balances: &[UserBalance],
    ) -> TokenDetails {
        let from_balances = user_balances
            .iter()
            .find(|balance| {
                balance.chain_id == chain_id
                    && are_token_addresses_equal(&balance.address, token_address)
            })
            .map(|balance| balance.decimals);

        let decimals = match from_balances {
            Some(decimals) => decimals,
            None => self
                .registry
                .find_token(token_address, chain_id)
                .map(|token| token.decimals)
                .unwrap_or_else(|| {
                    log::debug!(
                        "No decimals known for {} on chain {}, defaulting to {}",
                        token_address,
                        chain_id,
                        DEFAULT_TOKEN_DECIMALS
                    );
                    DEFAULT_TOKEN_DECIMALS
                }),
        };

        let token_type = if self.native.is_native_currency(token_address, chain_id) {
            TokenType::Native
        } else {
            TokenType::Erc20
        };

        TokenDetails { decimals, token_type }
    }
}

/// Resolve token details with the default native-currency check.
pub fn resolve_token_details(
    registry: &TokenRegistry,
    token_address: &str,
    chain_id: &str,
    user_balances: &[UserBalance],
) -> TokenDetails {
    TokenResolver::new(registry, &SentinelNativeCurrency).resolve_token_details(
        token_address,
        chain_id,
        user_balances,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::NATIVE_TOKEN_ADDRESS;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    const USDC_ETH: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
    const CUSTOM: &str = "0x1111111111111111111111111111111111111111";

    fn registry() -> TokenRegistry {
        TokenRegistry::new(vec![
            ChainTokenList {
                chain_id: 1,
                tokens: vec![
                    RegistryToken { address: NATIVE_TOKEN_ADDRESS.to_string(), decimals: 18, symbol: Some("ETH".to_string()), name: None },
                    RegistryToken { address: USDC_ETH.to_string(), decimals: 6, symbol: Some("USDC".to_string()), name: None },
                ],
            },
            ChainTokenList {
                chain_id: 56,
                tokens: vec![RegistryToken { address: USDC_ETH.to_string(), decimals: 18, symbol: None, name: None }],
            },
        ])
    }

    #[test]
    fn test_registry_token() {
        let details = resolve_token_details(&registry(), USDC_ETH, "1", &[]);
        assert_eq!(details, TokenDetails { decimals: 6, token_type: TokenType::Erc20 });
    }

    #[test]
    fn test_registry_lookup_ignores_case() {
        let details = resolve_token_details(&registry(), &USDC_ETH.to_lowercase(), "1", &[]);
        assert_eq!(details.decimals, 6);
    }

    #[test]
    fn test_registry_lookup_is_per_chain() {
        assert_eq!(resolve_token_details(&registry(), USDC_ETH, "56", &[]).decimals, 18);
        assert_eq!(resolve_token_details(&registry(), USDC_ETH, "137", &[]).decimals, 18);
    }

    #[test]
    fn test_native_token() {
        let details = resolve_token_details(&registry(), NATIVE_TOKEN_ADDRESS, "1", &[]);
        assert_eq!(details, TokenDetails { decimals: 18, token_type: TokenType::Native });
    }

    #[test]
    fn test_user_balance_takes_precedence() {
        let balances = vec![UserBalance::new(USDC_ETH.to_lowercase(), "1", 8)];
        let details = resolve_token_details(&registry(), USDC_ETH, "1", &balances);
        assert_eq!(details.decimals, 8);
    }

    #[test]
    fn test_user_balance_on_other_chain_is_ignored() {
        let balances = vec![UserBalance::new(USDC_ETH, "10", 8)];
        let details = resolve_token_details(&registry(), USDC_ETH, "1", &balances);
        assert_eq!(details.decimals, 6);
    }

    #[test]
    fn test_custom_token_from_balances() {
        let balances = vec![UserBalance::new(CUSTOM, "1", 9)];
        let details = resolve_token_details(&registry(), CUSTOM, "1", &balances);
        assert_eq!(details, TokenDetails { decimals: 9, token_type: TokenType::Erc20 });
    }

    #[test]
    fn test_unknown_token_defaults_to_18() {
        let details = resolve_token_details(&registry(), CUSTOM, "1", &[]);
        assert_eq!(details, TokenDetails { decimals: 18, token_type: TokenType::Erc20 });
    }

    #[test]
    fn test_custom_native_check() {
        let mut native = MockNativeCurrencyCheck::new();
        native
            .expect_is_native_currency()
            .with(eq(CUSTOM), eq("1"))
            .times(1)
            .return_const(true);

        let registry = registry();
        let resolver = TokenResolver::new(&registry, &native);
        let details = resolver.resolve_token_details(CUSTOM, "1", &[]);
        assert_eq!(details.token_type, TokenType::Native);
    }

    proptest! {
        #[test]
        fn prop_balances_beat_registry(decimals in 0u8..=36) {
            let balances = vec![UserBalance::new(USDC_ETH, "1", decimals)];
            let details = resolve_token_details(&registry(), USDC_ETH, "1", &balances);
            prop_assert_eq!(details.decimals, decimals);
        }

        #[test]
        fn prop_unknown_tokens_default(addr in "0x[0-9a-f]{40}", chain in 1000u64..2000) {
            let details = resolve_token_details(&registry(), &addr, &chain.to_string(), &[]);
            prop_assert_eq!(details.decimals, 18);
        }
    }
}
