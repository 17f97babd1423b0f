//! Constants for the link core
//!
//! Defaults used by the resolvers and the built-in chain snapshot that
//! `ChainTables::builtin()` is assembled from.

// Token resolution
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
/// Alternative native-currency marker used by aggregators and some wallets.
pub const NATIVE_TOKEN_SENTINEL: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

// Address validation
pub const ADDRESS_LENGTH: usize = 42; // 0x + 40 hex chars

// Contract version families
pub const NORMAL_VERSION_PREFIX: &str = "v";
pub const BATCH_VERSION_PREFIX: &str = "Bv";
pub const ROUTER_VERSION_PREFIX: &str = "Rv";

// Dashboard
pub const DEPOSIT_DATE_UNAVAILABLE: &str = "Unavailable";
pub const CLAIMED_LABEL: &str = "Claimed";
pub const DEFAULT_AMOUNT_FRACTION_DIGITS: usize = 4;

// Configuration
pub const ENV_PREFIX: &str = "PEANUT_LINK";
pub const TABLES_FILE_ENV: &str = "PEANUT_LINK_TABLES_FILE";
pub const LOG_LEVEL_ENV: &str = "PEANUT_LINK_LOG_LEVEL";
pub const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };

/// Built-in chain description
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: &'static str,
    pub native_currency: &'static str,
}

/// Built-in registry token. `eip3009` carries the EIP-712 domain
/// (name, version) when the token supports transfer authorizations.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub chain_id: u64,
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub decimals: u8,
    pub eip3009: Option<(&'static str, &'static str)>,
}

pub static CHAINS: &[ChainConfig] = &[
    ChainConfig { chain_id: 1, name: "Ethereum", native_currency: "ETH" },
    ChainConfig { chain_id: 10, name: "Optimism", native_currency: "ETH" },
    ChainConfig { chain_id: 137, name: "Polygon", native_currency: "MATIC" },
    ChainConfig { chain_id: 8453, name: "Base", native_currency: "ETH" },
    ChainConfig { chain_id: 42161, name: "Arbitrum One", native_currency: "ETH" },
    ChainConfig { chain_id: 84532, name: "Base Sepolia", native_currency: "ETH" },
];

pub static TOKENS: &[TokenConfig] = &[
    // Ethereum
    TokenConfig { chain_id: 1, symbol: "ETH", name: "Ether", address: NATIVE_TOKEN_ADDRESS, decimals: 18, eip3009: None },
    TokenConfig { chain_id: 1, symbol: "USDC", name: "USD Coin", address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", decimals: 6, eip3009: Some(("USD Coin", "2")) },
    TokenConfig { chain_id: 1, symbol: "USDT", name: "Tether USD", address: "0xdAC17F958D2ee523a2206206994597C13D831ec7", decimals: 6, eip3009: None },
    TokenConfig { chain_id: 1, symbol: "DAI", name: "Dai Stablecoin", address: "0x6B175474E89094C44Da98b954EedeAC495271d0F", decimals: 18, eip3009: None },
    TokenConfig { chain_id: 1, symbol: "WBTC", name: "Wrapped BTC", address: "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", decimals: 8, eip3009: None },
    // Optimism
    TokenConfig { chain_id: 10, symbol: "ETH", name: "Ether", address: NATIVE_TOKEN_ADDRESS, decimals: 18, eip3009: None },
    TokenConfig { chain_id: 10, symbol: "USDC", name: "USD Coin", address: "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85", decimals: 6, eip3009: Some(("USD Coin", "2")) },
    // Polygon
    TokenConfig { chain_id: 137, symbol: "MATIC", name: "Matic", address: NATIVE_TOKEN_ADDRESS, decimals: 18, eip3009: None },
    TokenConfig { chain_id: 137, symbol: "USDC", name: "USD Coin", address: "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359", decimals: 6, eip3009: Some(("USD Coin", "2")) },
    TokenConfig { chain_id: 137, symbol: "USDC.e", name: "USD Coin (PoS)", address: "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174", decimals: 6, eip3009: Some(("USD Coin (PoS)", "1")) },
    // Base
    TokenConfig { chain_id: 8453, symbol: "ETH", name: "Ether", address: NATIVE_TOKEN_ADDRESS, decimals: 18, eip3009: None },
    TokenConfig { chain_id: 8453, symbol: "USDC", name: "USD Coin", address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", decimals: 6, eip3009: Some(("USD Coin", "2")) },
    // Arbitrum One
    TokenConfig { chain_id: 42161, symbol: "ETH", name: "Ether", address: NATIVE_TOKEN_ADDRESS, decimals: 18, eip3009: None },
    TokenConfig { chain_id: 42161, symbol: "USDC", name: "USD Coin", address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831", decimals: 6, eip3009: Some(("USD Coin", "2")) },
    // Base Sepolia
    TokenConfig { chain_id: 84532, symbol: "ETH", name: "Ether", address: NATIVE_TOKEN_ADDRESS, decimals: 18, eip3009: None },
    TokenConfig { chain_id: 84532, symbol: "USDC", name: "USDC", address: "0x036CbD53842c5426634e7929541eC2318f3dCF7e", decimals: 6, eip3009: Some(("USDC", "2")) },
];

/// Vault contract versions deployed per chain.
pub static CONTRACT_DEPLOYMENTS: &[(u64, &[&str])] = &[
    (1, &["v3", "v4", "v4.2", "Bv4", "Rv4.2"]),
    (10, &["v4", "v4.2", "Bv4"]),
    (137, &["v4", "v4.2", "v4.3", "Bv4.3", "Rv4.2"]),
    (8453, &["v4.2", "v4.3", "Bv4.3"]),
    (42161, &["v4", "Bv4"]),
    (84532, &["v4.2", "v4.3", "Bv4.3", "Rv4.3"]),
];

/// Vault versions that accept an EIP-3009 transfer authorization as deposit.
pub static GASLESS_VAULT_VERSIONS: &[&str] = &["v4.2", "v4.3"];
