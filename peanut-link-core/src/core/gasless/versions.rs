//! Contract version resolution
//!
//! Each chain has a list of deployed vault versions. Versions carry their
//! family as a prefix (`v4.3`, `Bv4.3`, `Rv4.3`); the latest version of a
//! family is the one with the greatest dotted numeric part.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::shared::types::{Address, ChainId, ContractType, ContractVersion};

/// Resolves the most recent deployed contract version of a family on a chain.
#[cfg_attr(test, mockall::automock)]
pub trait ContractVersionResolver: Send + Sync {
    fn latest_contract_version(&self, chain_id: &str, contract_type: ContractType) -> Option<ContractVersion>;
}

/// Table of deployed contract versions per chain.
///
/// A chain's entry is either a list of versions or a map from version to the
/// deployed contract address; only the versions are kept. It serializes back
/// as lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<ChainId, DeployedVersions>",
    into = "HashMap<ChainId, Vec<ContractVersion>>"
)]
pub struct ContractDeployments {
    versions: HashMap<ChainId, Vec<ContractVersion>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DeployedVersions {
    Versions(Vec<ContractVersion>),
    Addresses(BTreeMap<ContractVersion, Address>),
}

impl From<DeployedVersions> for Vec<ContractVersion> {
    fn from(deployed: DeployedVersions) -> Self {
        match deployed {
            DeployedVersions::Versions(versions) => versions,
            DeployedVersions::Addresses(addresses) => addresses.into_keys().collect(),
        }
    }
}

impl From<HashMap<ChainId, DeployedVersions>> for ContractDeployments {
    fn from(chains: HashMap<ChainId, DeployedVersions>) -> Self {
        Self::new(
            chains
                .into_iter()
                .map(|(chain_id, deployed)| (chain_id, deployed.into()))
                .collect(),
        )
    }
}

impl From<ContractDeployments> for HashMap<ChainId, Vec<ContractVersion>> {
    fn from(deployments: ContractDeployments) -> Self {
        deployments.versions
    }
}

impl ContractDeployments {
    pub fn new(versions: HashMap<ChainId, Vec<ContractVersion>>) -> Self {
        Self { versions }
    }

    pub fn versions(&self, chain_id: &str) -> &[ContractVersion] {
        self.versions.get(chain_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn chain_count(&self) -> usize {
        self.versions.len()
    }
}

impl ContractVersionResolver for ContractDeployments {
    fn latest_contract_version(&self, chain_id: &str, contract_type: ContractType) -> Option<ContractVersion> {
        self.versions(chain_id)
            .iter()
            .filter_map(|version| {
                parse_version(version, contract_type).map(|parts| (parts, version))
            })
            .max_by(|(a, _), (b, _)| compare_parts(a, b))
            .map(|(_, version)| version.clone())
    }
}

/// Numeric components of `version` if it belongs to `contract_type`'s family.
pub fn parse_version(version: &str, contract_type: ContractType) -> Option<Vec<u32>> {
    let numeric = version.strip_prefix(contract_type.version_prefix())?;
    if !numeric.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    numeric.split('.').map(|part| part.parse::<u32>().ok()).collect()
}

fn compare_parts(a: &[u32], b: &[u32]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
