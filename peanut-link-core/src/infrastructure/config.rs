//! Configuration for the link core
//!
//! `ChainTables` holds every static table the resolvers read: the built-in
//! snapshot, or a JSON tables file. `LinkCoreConfig` carries process settings
//! from `.env` and `PEANUT_LINK_*` variables.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::core::gasless::{ContractDeployments, Eip3009Tokens, GaslessVaultVersions};
use crate::core::tokens::TokenRegistry;
use crate::domain::entities::{ChainDetails, ChainTokenList, Eip3009Domain, RegistryToken};
use crate::shared::constants::{
    CHAINS, CONTRACT_DEPLOYMENTS, DEFAULT_LOG_LEVEL, ENV_PREFIX, GASLESS_VAULT_VERSIONS, TOKENS,
};
use crate::shared::error::LinkError;
use crate::shared::utils::validate_ethereum_address;

lazy_static! {
    /// Built-in snapshot, shared by callers that do not load their own tables.
    pub static ref BUILTIN_TABLES: ChainTables = ChainTables::builtin();
}

/// Every static table the resolvers read. Loaded once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainTables {
    #[serde(default)]
    pub chains: Vec<ChainDetails>,
    #[serde(default)]
    pub token_registry: TokenRegistry,
    #[serde(default)]
    pub eip3009_tokens: Eip3009Tokens,
    #[serde(default)]
    pub gasless_vault_versions: GaslessVaultVersions,
    #[serde(default)]
    pub contract_deployments: ContractDeployments,
}

impl ChainTables {
    /// Tables assembled from the constants compiled into the crate.
    pub fn builtin() -> Self {
        let chains = CHAINS
            .iter()
            .map(|c| ChainDetails::new(c.chain_id, c.name, c.native_currency))
            .collect();

        let mut registry: Vec<ChainTokenList> = Vec::new();
        let mut eip3009_tokens: Eip3009Tokens = HashMap::new();
        for token in TOKENS {
            let entry = RegistryToken {
                address: token.address.to_string(),
                decimals: token.decimals,
                symbol: Some(token.symbol.to_string()),
                name: Some(token.name.to_string()),
            };
            match registry.iter_mut().find(|list| list.chain_id == token.chain_id) {
                Some(list) => list.tokens.push(entry),
                None => registry.push(ChainTokenList {
                    chain_id: token.chain_id,
                    tokens: vec![entry],
                }),
            }

            if let Some((name, version)) = token.eip3009 {
                eip3009_tokens
                    .entry(token.chain_id.to_string())
                    .or_default()
                    .insert(
                        token.address.to_string(),
                        Eip3009Domain {
                            name: name.to_string(),
                            version: version.to_string(),
                        },
                    );
            }
        }

        let deployments = CONTRACT_DEPLOYMENTS
            .iter()
            .map(|(chain_id, versions)| {
                (chain_id.to_string(), versions.iter().map(|v| v.to_string()).collect())
            })
            .collect();

        Self {
            chains,
            token_registry: TokenRegistry::new(registry),
            eip3009_tokens,
            gasless_vault_versions: GASLESS_VAULT_VERSIONS.iter().map(|v| v.to_string()).collect(),
            contract_deployments: ContractDeployments::new(deployments),
        }
    }

    /// Load tables from a JSON document. Sections missing from the file are empty.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinkError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            LinkError::config(format!("Failed to read tables file {}: {}", path.display(), e))
        })?;
        let tables: ChainTables = serde_json::from_str(&data).map_err(|e| {
            LinkError::config(format!("Invalid tables file {}: {}", path.display(), e))
        })?;
        log::info!(
            "Loaded tables for {} registry chains from {}",
            tables.token_registry.chains().len(),
            path.display()
        );
        Ok(tables)
    }

    /// Collect every inconsistency in the tables.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for list in self.token_registry.chains() {
            if !seen.insert(list.chain_id) {
                errors.push(format!("Chain {} appears more than once in the token registry", list.chain_id));
            }
            for token in &list.tokens {
                if let Err(e) = validate_ethereum_address(&token.address) {
                    errors.push(format!("Registry token {} on chain {}: {}", token.address, list.chain_id, e));
                }
            }
        }

        for (chain_id, tokens) in &self.eip3009_tokens {
            let mut lowered = HashSet::new();
            for address in tokens.keys() {
                if let Err(e) = validate_ethereum_address(address) {
                    errors.push(format!("EIP-3009 token {} on chain {}: {}", address, chain_id, e));
                }
                if !lowered.insert(address.to_lowercase()) {
                    errors.push(format!(
                        "EIP-3009 token {} on chain {} is listed twice with different case",
                        address, chain_id
                    ));
                }
            }
        }

        errors
    }

    pub fn validate(&self) -> Result<(), LinkError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(LinkError::config(errors.join("; ")))
        }
    }
}

/// Process settings, layered from defaults, `.env` and `PEANUT_LINK_*` variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCoreConfig {
    pub log_level: String,
    /// JSON file holding the stored links of every creator
    pub links_file: String,
    /// Optional JSON tables file replacing the built-in snapshot
    #[serde(default)]
    pub tables_file: Option<String>,
}

impl Default for LinkCoreConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            links_file: "links.json".to_string(),
            tables_file: None,
        }
    }
}

impl LinkCoreConfig {
    /// Read settings from the process environment (after loading `.env`).
    pub fn new() -> Result<Self, LinkError> {
        dotenv::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Read settings from an explicit variable map, as if it were the environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, LinkError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, LinkError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("links_file", defaults.links_file)?
            .add_source(environment)
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Tables named by `tables_file`, or the built-in snapshot. Loaded tables are validated.
    pub fn load_tables(&self) -> Result<ChainTables, LinkError> {
        match &self.tables_file {
            Some(path) => {
                let tables = ChainTables::from_file(path)?;
                tables.validate()?;
                Ok(tables)
            }
            None => Ok(BUILTIN_TABLES.clone()),
        }
    }

    pub fn summary(&self, tables: &ChainTables) -> serde_json::Value {
        serde_json::json!({
            "log_level": self.log_level,
            "links_file": self.links_file,
            "tables_file": self.tables_file,
            "chains": tables.chains.len(),
            "registry_chains": tables.token_registry.chains().len(),
            "registry_tokens": tables.token_registry.chains().iter().map(|c| c.tokens.len()).sum::<usize>(),
            "eip3009_chains": tables.eip3009_tokens.len(),
            "gasless_vault_versions": tables.gasless_vault_versions.iter().collect::<std::collections::BTreeSet<_>>(),
            "deployment_chains": tables.contract_deployments.chain_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gasless::ContractVersionResolver;
    use crate::shared::types::ContractType;
    use std::io::Write;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = ChainTables::builtin();
        assert!(tables.validate().is_ok(), "{:?}", tables.validation_errors());
        assert!(!tables.chains.is_empty());
        assert!(tables.gasless_vault_versions.contains("v4.2"));
    }

    #[test]
    fn test_builtin_registry_groups_tokens_by_chain() {
        let tables = ChainTables::builtin();
        let polygon = tables.token_registry.chain("137").expect("polygon in registry");
        assert!(polygon.tokens.iter().any(|t| t.symbol.as_deref() == Some("USDC.e")));
        assert_eq!(tables.eip3009_tokens["137"].len(), 2);
    }

    #[test]
    fn test_from_file_partial_document() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{
                "token_registry": [
                    {{ "chain_id": 5, "tokens": [{{ "address": "0x1111111111111111111111111111111111111111", "decimals": 6 }}] }}
                ],
                "gasless_vault_versions": ["v4.3"]
            }}"#
        )
        .expect("Failed to write tables");

        let tables = ChainTables::from_file(file.path()).expect("Failed to load tables");
        assert_eq!(tables.token_registry.chains().len(), 1);
        assert!(tables.eip3009_tokens.is_empty());
        assert!(tables.gasless_vault_versions.contains("v4.3"));
    }

    #[test]
    fn test_from_file_contract_deployments() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{
                "contract_deployments": {{
                    "137": {{ "v4.3": "0x1111111111111111111111111111111111111111", "v4.2": "0x2222222222222222222222222222222222222222" }},
                    "10": ["v4", "v4.2"]
                }}
            }}"#
        )
        .expect("Failed to write tables");

        let tables = ChainTables::from_file(file.path()).expect("Failed to load tables");
        assert_eq!(tables.contract_deployments.chain_count(), 2);
        assert_eq!(
            tables.contract_deployments.latest_contract_version("137", ContractType::Normal),
            Some("v4.3".to_string())
        );
        assert_eq!(
            tables.contract_deployments.latest_contract_version("10", ContractType::Normal),
            Some("v4.2".to_string())
        );
    }

    #[test]
    fn test_from_file_missing() {
        let err = ChainTables::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LinkError::Config(_)));
    }

    #[test]
    fn test_validation_reports_duplicates_and_bad_addresses() {
        let list = ChainTokenList {
            chain_id: 1,
            tokens: vec![RegistryToken { address: "0x12".to_string(), decimals: 6, symbol: None, name: None }],
        };
        let mut tables = ChainTables {
            token_registry: TokenRegistry::new(vec![list.clone(), list]),
            ..Default::default()
        };
        let domain = Eip3009Domain { name: "USD Coin".to_string(), version: "2".to_string() };
        let mut chain = HashMap::new();
        chain.insert("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(), domain.clone());
        chain.insert("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(), domain);
        tables.eip3009_tokens.insert("1".to_string(), chain);

        let errors = tables.validation_errors();
        assert!(errors.iter().any(|e| e.contains("more than once")));
        assert!(errors.iter().any(|e| e.contains("0x12")));
        assert!(errors.iter().any(|e| e.contains("different case")));
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = LinkCoreConfig::from_vars(HashMap::new()).expect("Failed to build config");
        assert_eq!(config, LinkCoreConfig::default());
        assert_eq!(config.load_tables().unwrap(), *BUILTIN_TABLES);
    }

    #[test]
    fn test_config_from_vars() {
        let mut vars = HashMap::new();
        vars.insert("PEANUT_LINK_LOG_LEVEL".to_string(), "warn".to_string());
        vars.insert("PEANUT_LINK_LINKS_FILE".to_string(), "/tmp/links.json".to_string());

        let config = LinkCoreConfig::from_vars(vars).expect("Failed to build config");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.links_file, "/tmp/links.json");
        assert_eq!(config.tables_file, None);
    }

    #[test]
    fn test_invalid_tables_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{ "token_registry": [{{ "chain_id": 1, "tokens": [{{ "address": "0xnope", "decimals": 6 }}] }}] }}"#
        )
        .expect("Failed to write tables");

        let config = LinkCoreConfig {
            tables_file: Some(file.path().display().to_string()),
            ..Default::default()
        };
        assert!(matches!(config.load_tables(), Err(LinkError::Config(_))));
    }

    #[test]
    fn test_summary() {
        let config = LinkCoreConfig::default();
        let summary = config.summary(&BUILTIN_TABLES);
        assert_eq!(summary["registry_chains"], 6);
        assert_eq!(summary["gasless_vault_versions"], serde_json::json!(["v4.2", "v4.3"]));
    }
}
