//! Run the policy engine once.

use std::path::Path;

use anyhow::Result;

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    let minted = ledger.check_and_mint()?;
    store::save(state_path, &ledger)?;

    if minted > 0 {
        println!("Minted {minted} into the distribution pool");
    } else {
        println!("Supply already matches production; nothing to mint");
    }
    println!("Total supply: {}", ledger.total_supply());
    Ok(())
}
