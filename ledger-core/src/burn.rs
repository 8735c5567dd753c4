//! The decay engine: retiring rotted collateral and matching supply.

use crate::{
    config::BurnSource,
    error::{LedgerError, LedgerResult},
    events::LedgerEvent,
    ledger::Ledger,
    oracle::PriceOracle,
};

impl<O: PriceOracle> Ledger<O> {
    /// Burn `value_lost` worth of rotted collateral out of the registry and
    /// the circulating supply.
    ///
    /// The magnitude is caller-supplied but audited: the burn must be
    /// covered by active batches whose expiration height has passed at the
    /// current height, and those batches are retired oldest expiration
    /// first (the last one partially if needed). The matching supply is
    /// debited from the configured burn source account; an underfunded
    /// source is an error, never a clamp, so conservation survives.
    pub fn burn_rotting_assets(&mut self, value_lost: i128) -> LedgerResult<()> {
        let (treasury, distribution_pool) = self.system_accounts()?;
        if value_lost <= 0 {
            return Err(LedgerError::NonPositiveBurnValue(value_lost));
        }
        if value_lost > self.total_production {
            return Err(LedgerError::InsufficientCollateral {
                registered: self.total_production,
                requested: value_lost,
            });
        }
        let rotted = self.registry.rotted_value(self.height);
        if value_lost > rotted {
            return Err(LedgerError::InsufficientRottedCollateral {
                rotted,
                requested: value_lost,
                height: self.height,
            });
        }
        let source = match self.config.burn_source {
            BurnSource::DistributionPool => distribution_pool,
            BurnSource::Treasury => treasury,
        };

        // The debit is the only fallible write; it runs first so a failure
        // leaves the registry and aggregates untouched.
        self.balances.debit(source, value_lost)?;
        let retired = self.registry.retire_rotted(self.height, value_lost);
        self.total_production -= value_lost;
        // The source balance covered value_lost, so supply stays >= 0.
        self.total_supply -= value_lost;
        self.events.publish(LedgerEvent::Burned { amount: value_lost });
        tracing::debug!(
            amount = value_lost,
            retired_batches = retired.len(),
            "burned rotted collateral"
        );
        Ok(())
    }
}
