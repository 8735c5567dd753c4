//! Register a production batch as collateral.

use std::path::Path;

use anyhow::Result;

use crate::{config::Config, store};

pub fn run(
    config_path: &Path,
    state_path: &Path,
    category: &str,
    quantity: i128,
    unit_price: Option<i128>,
    expires: u64,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    let id = ledger.register_production(category, quantity, unit_price, expires)?;
    store::save(state_path, &ledger)?;

    let value = ledger.batch(id).map(|b| b.value).unwrap_or_default();
    println!("Registered batch {id}: {quantity} x {category} worth {value}, rots after height {expires}");
    println!("Total production: {}", ledger.total_production());
    Ok(())
}
