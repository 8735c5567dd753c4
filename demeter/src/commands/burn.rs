//! Burn rotted collateral value and the matching supply.

use std::path::Path;

use anyhow::Result;

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path, value: i128) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    ledger.burn_rotting_assets(value)?;
    store::save(state_path, &ledger)?;

    println!("Burned {value} of rotted collateral and matching supply");
    println!("Total production: {}", ledger.total_production());
    println!("Total supply:     {}", ledger.total_supply());
    Ok(())
}
