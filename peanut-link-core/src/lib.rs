//! Peanut Link Core
//!
//! Shared logic behind link creation and the created-links dashboard.
//!
//! ## Architecture
//!
//! - **Core**: Token resolution, gasless eligibility, value conversion, dashboard
//! - **Domain**: Entities and the storage/SDK traits
//! - **Infrastructure**: Chain tables, settings and logging
//! - **Shared**: Common types, constants, and utilities
//!
//! ## Usage
//!
//! ```rust
//! use peanut_link_core::LinkCore;
//!
//! let core = LinkCore::builtin();
//!
//! let details = core.resolve_token_details("0x0000000000000000000000000000000000000000", "1", &[]);
//! assert_eq!(details.decimals, 18);
//!
//! let usd = core.convert_value(100.0, 4.0);
//! assert_eq!(usd, 25.0);
//! ```

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

#[cfg(feature = "ffi")]
pub mod ffi;

use crate::core::dashboard::Dashboard;
use crate::core::gasless::{ContractVersionResolver, GaslessEligibility};
use crate::core::tokens::{SentinelNativeCurrency, TokenResolver};
use crate::domain::entities::chain_name;
use crate::domain::repositories::{LinkDetailsSource, LinkRepository};
use crate::infrastructure::config::{LinkCoreConfig, BUILTIN_TABLES};
use crate::infrastructure::logger::init_logging;

// Re-export specific components
pub use crate::core::dashboard::{export_items, DashboardView};
pub use crate::core::value::{convert_value, try_convert_value};
pub use crate::infrastructure::config::ChainTables;

// Re-export domain entities
pub use crate::domain::entities::{DashboardItem, Eip3009Domain, LinkDetails, StoredLink, TokenDetails, UserBalance};

// Re-export shared types
pub use shared::error::LinkError;
pub use shared::types::{ContractType, ContractVersion, TokenType};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Entry point over one loaded set of chain tables.
#[derive(Debug, Clone)]
pub struct LinkCore {
    tables: ChainTables,
}

impl LinkCore {
    /// Use caller-supplied tables. Tables failing [`ChainTables::validate`] are rejected.
    pub fn with_tables(tables: ChainTables) -> Result<Self, LinkError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// Built-in tables compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            tables: BUILTIN_TABLES.clone(),
        }
    }

    /// Tables selected by `config` (a tables file, or the built-in snapshot).
    pub fn from_config(config: &LinkCoreConfig) -> Result<Self, LinkError> {
        Self::with_tables(config.load_tables()?)
    }

    pub fn tables(&self) -> &ChainTables {
        &self.tables
    }

    pub fn convert_value(&self, token_value: f64, token_price: f64) -> f64 {
        convert_value(token_value, token_price)
    }

    pub fn try_convert_value(&self, token_value: f64, token_price: f64) -> Result<f64, LinkError> {
        try_convert_value(token_value, token_price)
    }

    pub fn resolve_token_details(
        &self,
        token_address: &str,
        chain_id: &str,
        user_balances: &[UserBalance],
    ) -> TokenDetails {
        TokenResolver::new(&self.tables.token_registry, &SentinelNativeCurrency)
            .resolve_token_details(token_address, chain_id, user_balances)
    }

    fn gasless(&self) -> GaslessEligibility<'_> {
        GaslessEligibility::new(
            &self.tables.eip3009_tokens,
            &self.tables.gasless_vault_versions,
            &self.tables.contract_deployments,
        )
    }

    pub fn is_gasless_deposit_possible(
        &self,
        token_address: &str,
        chain_id: &str,
        latest_contract_version: Option<&str>,
    ) -> bool {
        self.gasless()
            .is_gasless_deposit_possible(token_address, chain_id, latest_contract_version)
    }

    pub fn eip3009_domain(&self, token_address: &str, chain_id: &str) -> Option<Eip3009Domain> {
        self.gasless().eip3009_domain(token_address, chain_id)
    }

    pub fn latest_contract_version(&self, chain_id: &str, contract_type: ContractType) -> Option<ContractVersion> {
        self.tables
            .contract_deployments
            .latest_contract_version(chain_id, contract_type)
    }

    pub fn chain_name(&self, chain_id: &str) -> Option<&str> {
        chain_name(chain_id, &self.tables.chains)
    }

    pub fn dashboard<'a>(
        &self,
        links: &'a dyn LinkRepository,
        details: &'a dyn LinkDetailsSource,
    ) -> Dashboard<'a> {
        Dashboard::new(links, details)
    }
}

/// Load settings, install the logger and build a [`LinkCore`].
pub fn init() -> Result<LinkCore, LinkError> {
    let config = LinkCoreConfig::new()?;
    init_logging(&config.log_level);
    let core = LinkCore::from_config(&config)?;
    log::info!("{} {} ready ({} chains)", NAME, VERSION, core.tables().chains.len());
    Ok(core)
}
