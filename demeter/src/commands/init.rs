//! Create the ledger state and pin the system accounts.

use std::path::Path;

use anyhow::{bail, Result};
use dmt_ledger_core::{AccountId, Ledger};

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path, treasury: u64, pool: u64) -> Result<()> {
    let config = Config::load(config_path)?;
    if store::exists(state_path) {
        bail!("ledger state already exists at {}", state_path.display());
    }

    let mut ledger = Ledger::new(config.policy.clone(), config.catalog());
    ledger.initialize(AccountId::new(treasury), AccountId::new(pool))?;
    store::save(state_path, &ledger)?;

    println!("Initialized ledger at {}", state_path.display());
    println!("  treasury:          {treasury}");
    println!("  distribution pool: {pool}");
    Ok(())
}
