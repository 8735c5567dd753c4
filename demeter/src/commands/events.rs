//! Print and clear pending events.

use std::path::Path;

use anyhow::Result;
use dmt_ledger_core::LedgerEvent;

use crate::{config::Config, store};

pub fn run(config_path: &Path, state_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut ledger = store::load(state_path, config.policy.clone(), config.catalog())?;

    let events = ledger.drain_events();
    if events.is_empty() {
        println!("No pending events");
        return Ok(());
    }
    store::save(state_path, &ledger)?;

    for event in events {
        match event {
            LedgerEvent::ProductionAdded { category, value } => {
                println!("production-added   category={category} value={value}")
            }
            LedgerEvent::Minted { amount } => {
                println!("minted             amount={amount}")
            }
            LedgerEvent::Burned { amount } => {
                println!("burned             amount={amount}")
            }
            LedgerEvent::TransferVelocity { amount } => {
                println!("transfer-velocity  amount={amount}")
            }
            LedgerEvent::HotBatchMinted {
                category,
                amount,
                expiration_height,
            } => {
                println!(
                    "hot-batch-minted   category={category} amount={amount} expires={expiration_height}"
                )
            }
        }
    }
    Ok(())
}
