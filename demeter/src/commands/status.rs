//! Show aggregates, height and velocity.

use std::path::Path;

use anyhow::Result;

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    println!();
    println!("=== Ledger Status ===");
    println!("Height:            {}", ledger.height());
    println!("Total production:  {}", ledger.total_production());
    println!("Total supply:      {}", ledger.total_supply());
    println!("Rotted value:      {}", ledger.rotted_value());
    println!("Velocity (window): {}", ledger.velocity());
    println!("Active batches:    {}", ledger.active_batches().count());
    println!("Pending events:    {}", ledger.events().len());
    if let (Ok(treasury), Ok(pool)) = (ledger.treasury(), ledger.distribution_pool()) {
        println!();
        println!("Treasury {treasury}:          {}", ledger.balance(treasury));
        println!("Distribution pool {pool}: {}", ledger.balance(pool));
    }
    println!();
    Ok(())
}
