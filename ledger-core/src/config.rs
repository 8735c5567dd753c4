//! Policy parameters for the ledger.

/// Which system account a burn debits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BurnSource {
    /// The account that receives newly minted seigniorage.
    #[default]
    DistributionPool,
    /// The account that accumulates transfer tax.
    Treasury,
}

/// Tunable policy parameters.
///
/// These shape the observational surface (hot-batch announcements, the
/// velocity window) and the burn path; none of them change the core
/// mint/burn arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Batches registered with an expiration closer than this many heights
    /// are announced as hot.
    pub hot_batch_threshold: u64,

    /// Width of the transfer-velocity window, in heights.
    pub velocity_window: u64,

    /// Account debited when rotted collateral value is burned.
    pub burn_source: BurnSource,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            hot_batch_threshold: 17_280, // ~1 day at 5s heights
            velocity_window: 720,        // ~1 hour at 5s heights
            burn_source: BurnSource::DistributionPool,
        }
    }
}

impl PolicyConfig {
    /// Config with a specific hot-batch threshold.
    pub fn with_hot_batch_threshold(mut self, heights: u64) -> Self {
        self.hot_batch_threshold = heights;
        self
    }

    /// Config with a specific velocity window.
    pub fn with_velocity_window(mut self, heights: u64) -> Self {
        self.velocity_window = heights;
        self
    }

    /// Config with a specific burn source.
    pub fn with_burn_source(mut self, source: BurnSource) -> Self {
        self.burn_source = source;
        self
    }
}
