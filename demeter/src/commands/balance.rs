//! Show an account balance.

use std::path::Path;

use anyhow::Result;
use dmt_ledger_core::AccountId;

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path, account: u64) -> Result<()> {
    let config = Config::load(config_path)?;
    let ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    println!(
        "Account {account}: {}",
        ledger.balance(AccountId::new(account))
    );
    Ok(())
}
