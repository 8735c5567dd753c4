//! Ledger snapshot persistence.
//!
//! One bincode-encoded snapshot per state file. Writes go through a
//! sibling temp file and a rename, so a crash mid-write leaves the old
//! state readable.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dmt_ledger_core::{Ledger, LedgerSnapshot, PolicyConfig, PriceCatalog};

/// Whether a ledger state file exists at `path`.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Load the ledger from `path`, wiring in the given policy and catalog.
pub fn load(path: &Path, policy: PolicyConfig, catalog: PriceCatalog) -> Result<Ledger> {
    if !path.exists() {
        bail!(
            "no ledger state at {}; run `demeter init` first",
            path.display()
        );
    }
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read ledger state at {}", path.display()))?;
    let snapshot: LedgerSnapshot = bincode::deserialize(&bytes)
        .with_context(|| format!("ledger state at {} is corrupt", path.display()))?;
    tracing::debug!(path = %path.display(), height = snapshot.height, "loaded ledger state");
    Ok(Ledger::restore(policy, catalog, snapshot))
}

/// Persist the ledger snapshot to `path`.
pub fn save(path: &Path, ledger: &Ledger) -> Result<()> {
    let bytes =
        bincode::serialize(&ledger.snapshot()).context("failed to encode ledger snapshot")?;
    let tmp = path.with_extension("state.tmp");
    fs::write(&tmp, &bytes).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved ledger state");
    Ok(())
}
