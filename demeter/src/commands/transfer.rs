//! Taxed transfer between accounts.

use std::path::Path;

use anyhow::Result;
use dmt_ledger_core::AccountId;

use crate::{config::Config, store};

pub fn run(
    config_path: &Path,
    state_path: &Path,
    from: u64,
    to: u64,
    amount: i128,
    tax: i128,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    let from = AccountId::new(from);
    let to = AccountId::new(to);
    ledger.transfer_with_tax(from, to, amount, tax)?;
    store::save(state_path, &ledger)?;

    println!("Transferred {} to account {to} ({tax} tax to treasury)", amount - tax);
    println!("  {from}: {}", ledger.balance(from));
    println!("  {to}: {}", ledger.balance(to));
    Ok(())
}
