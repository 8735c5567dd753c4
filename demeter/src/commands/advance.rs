//! Advance the recorded chain height.

use std::path::Path;

use anyhow::Result;

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path, height: u64) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    ledger.advance_height(height)?;
    store::save(state_path, &ledger)?;

    println!("Height is now {height}");
    let rotted = ledger.rotted_value();
    if rotted > 0 {
        println!("Rotted collateral awaiting burn: {rotted}");
    }
    Ok(())
}
