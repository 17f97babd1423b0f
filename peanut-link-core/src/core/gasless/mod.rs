//! Gasless deposit eligibility
//!
//! A deposit can be funded with an EIP-3009 transfer authorization instead of
//! an approve + deposit transaction when two things hold: the token implements
//! `transferWithAuthorization` on that chain, and the vault version the link
//! will be created against accepts such deposits.

pub mod versions;

use std::collections::{HashMap, HashSet};

use crate::domain::entities::Eip3009Domain;
use crate::shared::types::{ChainId, ContractType, ContractVersion};
use crate::shared::utils::to_lower_case_keys;

pub use versions::{ContractDeployments, ContractVersionResolver};

/// EIP-3009 capable tokens: chain id -> token address -> signing domain.
/// Address keys may be in any case; lookups normalise them.
pub type Eip3009Tokens = HashMap<ChainId, HashMap<String, Eip3009Domain>>;

/// Vault versions that accept gasless deposits.
pub type GaslessVaultVersions = HashSet<ContractVersion>;

pub struct GaslessEligibility<'a> {
    eip3009_tokens: &'a Eip3009Tokens,
    vault_versions: &'a GaslessVaultVersions,
    version_resolver: &'a dyn ContractVersionResolver,
}

impl<'a> GaslessEligibility<'a> {
    pub fn new(
        eip3009_tokens: &'a Eip3009Tokens,
        vault_versions: &'a GaslessVaultVersions,
        version_resolver: &'a dyn ContractVersionResolver,
    ) -> Self {
        Self {
            eip3009_tokens,
            vault_versions,
            version_resolver,
        }
    }

    /// Whether `token_address` on `chain_id` can be deposited gaslessly.
    ///
    /// Without an explicit version the latest normal vault of the chain is used.
    /// A chain with no known vault or no EIP-3009 table is never eligible.
    pub fn is_gasless_deposit_possible(
        &self,
        token_address: &str,
        chain_id: &str,
        latest_contract_version: Option<&str>,
    ) -> bool {
        let version = match latest_contract_version {
            Some(version) => version.to_string(),
            None => match self
                .version_resolver
                .latest_contract_version(chain_id, ContractType::Normal)
            {
                Some(version) => version,
                None => {
                    log::debug!("No {} vault deployed on chain {}", ContractType::Normal, chain_id);
                    return false;
                }
            },
        };

        let tokens = to_lower_case_keys(self.eip3009_tokens.get(chain_id));
        let capable = tokens.contains_key(&token_address.to_lowercase());

        capable && self.vault_versions.contains(&version)
    }

    /// Signing domain of the token when it supports transfer authorizations.
    pub fn eip3009_domain(&self, token_address: &str, chain_id: &str) -> Option<Eip3009Domain> {
        to_lower_case_keys(self.eip3009_tokens.get(chain_id)).remove(&token_address.to_lowercase())
    }
}
