use anyhow::Result;
use dotenv::dotenv;
use std::env;

use peanut_link_core::infrastructure::config::LinkCoreConfig;
use peanut_link_core::infrastructure::logger::init_logging;
use peanut_link_core::shared::constants::{LOG_LEVEL_ENV, TABLES_FILE_ENV};
use peanut_link_core::{ContractType, LinkCore};

fn main() -> Result<()> {
    dotenv().ok();
    let config = LinkCoreConfig::new()?;
    init_logging(&config.log_level);

    let core = LinkCore::from_config(&config)?;
    let tables = core.tables();
    let summary = config.summary(tables);

    println!("Peanut Link Core Configuration ({} {}):\n", peanut_link_core::NAME, peanut_link_core::VERSION);
    println!("  {}: {}", LOG_LEVEL_ENV, env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "(not set)".to_string()));
    println!("  {}: {}", TABLES_FILE_ENV, env::var(TABLES_FILE_ENV).unwrap_or_else(|_| "(not set)".to_string()));
    println!("  Links file: {}", config.links_file);
    println!();

    for chain in &tables.chains {
        let chain_id = chain.chain_id.to_string();
        let latest = core
            .latest_contract_version(&chain_id, ContractType::Normal)
            .unwrap_or_else(|| "(none)".to_string());
        let gasless = tables
            .eip3009_tokens
            .get(&chain_id)
            .map(|tokens| tokens.len())
            .unwrap_or(0);
        println!(
            "  {:>6}  {:<14} native {:<6} latest vault {:<6} EIP-3009 tokens {}",
            chain.chain_id, chain.name, chain.native_currency, latest, gasless
        );
    }

    println!("\n{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
