//! The monetary policy engine.

use crate::{error::LedgerResult, events::LedgerEvent, ledger::Ledger, oracle::PriceOracle};

impl<O: PriceOracle> Ledger<O> {
    /// Mint the gap between live collateral value and circulating supply.
    ///
    /// The seigniorage rule: supply is pulled toward, never pushed below,
    /// the value of registered, unexpired collateral. New tokens land in
    /// the distribution pool. A non-positive gap is a successful no-op
    /// returning zero; contraction happens only through
    /// [burn_rotting_assets](Self::burn_rotting_assets).
    pub fn check_and_mint(&mut self) -> LedgerResult<i128> {
        let (_, distribution_pool) = self.system_accounts()?;

        let gap = self.total_production - self.total_supply;
        if gap <= 0 {
            return Ok(0);
        }

        self.balances.credit(distribution_pool, gap)?;
        // Supply lands exactly on total_production, itself a valid i128.
        self.total_supply += gap;
        self.events.publish(LedgerEvent::Minted { amount: gap });
        tracing::debug!(amount = gap, "minted against collateral gap");
        Ok(gap)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AccountId, LedgerError, LedgerEvent, PolicyConfig, PriceCatalog};

    use super::*;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new(
            PolicyConfig::default().with_hot_batch_threshold(0),
            PriceCatalog::new(),
        );
        ledger
            .initialize(AccountId::new(1), AccountId::new(2))
            .unwrap();
        ledger
    }

    #[test]
    fn test_mint_closes_the_gap_exactly() {
        let mut ledger = ledger();
        ledger
            .register_production("corn", 10, Some(100), 1000)
            .unwrap();

        let minted = ledger.check_and_mint().unwrap();
        assert_eq!(minted, 1000);
        assert_eq!(ledger.total_supply(), 1000);
        assert_eq!(ledger.balance(AccountId::new(2)), 1000);
        assert_eq!(ledger.verify_invariants(), Ok(()));
    }

    #[test]
    fn test_second_mint_is_a_noop() {
        let mut ledger = ledger();
        ledger
            .register_production("corn", 10, Some(100), 1000)
            .unwrap();
        ledger.check_and_mint().unwrap();
        let events_after_first = ledger.events().len();

        let minted = ledger.check_and_mint().unwrap();
        assert_eq!(minted, 0);
        assert_eq!(ledger.total_supply(), 1000);
        // A no-op mint is silent.
        assert_eq!(ledger.events().len(), events_after_first);
    }

    #[test]
    fn test_mint_with_no_production_is_a_noop() {
        let mut ledger = ledger();
        assert_eq!(ledger.check_and_mint(), Ok(0));
        assert_eq!(ledger.total_supply(), 0);
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn test_mint_only_covers_new_production() {
        let mut ledger = ledger();
        ledger
            .register_production("corn", 10, Some(100), 1000)
            .unwrap();
        ledger.check_and_mint().unwrap();

        ledger
            .register_production("corn", 3, Some(100), 1000)
            .unwrap();
        let minted = ledger.check_and_mint().unwrap();
        assert_eq!(minted, 300);
        assert_eq!(ledger.total_supply(), 1300);

        let minted_events: Vec<_> = ledger
            .events()
            .iter()
            .filter(|e| matches!(e, LedgerEvent::Minted { .. }))
            .collect();
        assert_eq!(minted_events.len(), 2);
    }

    #[test]
    fn test_mint_requires_initialization() {
        let mut ledger: Ledger = Ledger::new(PolicyConfig::default(), PriceCatalog::new());
        assert_eq!(ledger.check_and_mint(), Err(LedgerError::NotInitialized));
    }
}
