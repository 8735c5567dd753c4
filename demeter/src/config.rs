//! TOML configuration: policy knobs and the price catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dmt_ledger_core::{PolicyConfig, PriceCatalog};
use serde::{Deserialize, Serialize};

/// On-disk configuration for the operator CLI.
///
/// Everything is optional: a missing file means default policy and an
/// empty catalog, in which case every registration must assert its price.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ledger policy parameters.
    pub policy: PolicyConfig,

    /// Fixed unit prices per product category, consulted when `register`
    /// runs without `--unit-price`.
    pub catalog: BTreeMap<String, i64>,
}

impl Config {
    /// Load from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// The catalog as a ledger price oracle.
    pub fn catalog(&self) -> PriceCatalog {
        let mut catalog = PriceCatalog::new();
        for (category, price) in &self.catalog {
            catalog.set_price(category.as_str(), i128::from(*price));
        }
        catalog
    }
}
