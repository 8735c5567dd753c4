//! Collateral registration.

use crate::{
    batch::BatchId,
    error::{LedgerError, LedgerResult},
    events::LedgerEvent,
    ledger::Ledger,
    oracle::PriceOracle,
};

impl<O: PriceOracle> Ledger<O> {
    /// Register a pledged production batch as collateral.
    ///
    /// `unit_price` is caller-asserted when given; otherwise the injected
    /// price oracle resolves it from the category. The batch value is
    /// `quantity × unit_price`, checked.
    ///
    /// Registering is not minting: no balance or supply changes here. The
    /// policy engine closes the gap on its next run. Batches whose
    /// expiration is nearer than the hot-batch threshold are additionally
    /// announced as hot.
    pub fn register_production(
        &mut self,
        category: &str,
        quantity: i128,
        unit_price: Option<i128>,
        expiration_height: u64,
    ) -> LedgerResult<BatchId> {
        self.system_accounts()?;
        if category.is_empty() {
            return Err(LedgerError::EmptyProductCategory);
        }
        if quantity <= 0 {
            return Err(LedgerError::NonPositiveQuantity(quantity));
        }
        let unit_price = match unit_price {
            Some(price) => price,
            None => self
                .oracle
                .unit_price(category)
                .ok_or_else(|| LedgerError::UnpricedCategory(category.to_owned()))?,
        };
        if unit_price <= 0 {
            return Err(LedgerError::NonPositiveUnitPrice(unit_price));
        }
        if expiration_height <= self.height {
            return Err(LedgerError::ExpirationNotInFuture {
                expiration: expiration_height,
                current: self.height,
            });
        }
        let value = quantity
            .checked_mul(unit_price)
            .ok_or(LedgerError::Overflow("batch value"))?;
        let new_production = self
            .total_production
            .checked_add(value)
            .ok_or(LedgerError::Overflow("total production"))?;

        // Everything checked; commit.
        let id = self.registry.register(
            category.to_owned(),
            quantity,
            unit_price,
            value,
            expiration_height,
        );
        self.total_production = new_production;
        self.events.publish(LedgerEvent::ProductionAdded {
            category: category.to_owned(),
            value,
        });
        if expiration_height - self.height < self.config.hot_batch_threshold {
            self.events.publish(LedgerEvent::HotBatchMinted {
                category: category.to_owned(),
                amount: value,
                expiration_height,
            });
        }
        tracing::debug!(
            batch = id.0,
            category,
            value,
            expiration_height,
            "registered production batch"
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        AccountId, BurnSource, LedgerError, LedgerEvent, PolicyConfig, PriceCatalog,
    };

    use super::*;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new(
            PolicyConfig::default()
                .with_hot_batch_threshold(100)
                .with_burn_source(BurnSource::DistributionPool),
            PriceCatalog::new().with_price("corn", 100),
        );
        ledger
            .initialize(AccountId::new(1), AccountId::new(2))
            .unwrap();
        ledger
    }

    #[test]
    fn test_register_with_explicit_price() {
        let mut ledger = ledger();
        let id = ledger
            .register_production("corn", 10, Some(100), 1000)
            .unwrap();

        assert_eq!(ledger.total_production(), 1000);
        assert_eq!(ledger.total_supply(), 0);

        let batch = ledger.batch(id).unwrap();
        assert_eq!(batch.quantity, 10);
        assert_eq!(batch.unit_price, 100);
        assert_eq!(batch.value, 1000);
    }

    #[test]
    fn test_register_resolves_price_through_oracle() {
        let mut ledger = ledger();
        ledger.register_production("corn", 40, None, 1000).unwrap();
        assert_eq!(ledger.total_production(), 4000);
    }

    #[test]
    fn test_unquoted_category_without_explicit_price_fails() {
        let mut ledger = ledger();
        let err = ledger
            .register_production("saffron", 1, None, 1000)
            .unwrap_err();
        assert_eq!(err, LedgerError::UnpricedCategory("saffron".into()));
        assert_eq!(ledger.total_production(), 0);
    }

    #[test]
    fn test_argument_validation() {
        let mut ledger = ledger();
        ledger.advance_height(50).unwrap();

        assert_eq!(
            ledger.register_production("", 1, Some(1), 1000),
            Err(LedgerError::EmptyProductCategory)
        );
        assert_eq!(
            ledger.register_production("corn", 0, Some(1), 1000),
            Err(LedgerError::NonPositiveQuantity(0))
        );
        assert_eq!(
            ledger.register_production("corn", 1, Some(-5), 1000),
            Err(LedgerError::NonPositiveUnitPrice(-5))
        );
        assert_eq!(
            ledger.register_production("corn", 1, Some(1), 50),
            Err(LedgerError::ExpirationNotInFuture {
                expiration: 50,
                current: 50,
            })
        );
        assert_eq!(ledger.total_production(), 0);
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn test_value_overflow_leaves_aggregates_unchanged() {
        let mut ledger = ledger();
        ledger.register_production("corn", 10, None, 1000).unwrap();

        let err = ledger
            .register_production("corn", i128::MAX, Some(2), 1000)
            .unwrap_err();
        assert_eq!(err, LedgerError::Overflow("batch value"));
        assert_eq!(ledger.total_production(), 1000);
        assert_eq!(ledger.verify_invariants(), Ok(()));
    }

    #[test]
    fn test_production_total_overflow_is_rejected() {
        let mut ledger = ledger();
        ledger
            .register_production("corn", 1, Some(i128::MAX), 1000)
            .unwrap();

        let err = ledger
            .register_production("corn", 1, Some(1), 1000)
            .unwrap_err();
        assert_eq!(err, LedgerError::Overflow("total production"));
        assert_eq!(ledger.total_production(), i128::MAX);
    }

    #[test]
    fn test_far_expiry_is_not_hot() {
        let mut ledger = ledger();
        ledger
            .register_production("corn", 10, None, 5000)
            .unwrap();

        assert_eq!(
            ledger.events(),
            &[LedgerEvent::ProductionAdded {
                category: "corn".into(),
                value: 1000,
            }]
        );
    }

    #[test]
    fn test_near_expiry_announces_hot_batch() {
        let mut ledger = ledger();
        ledger.register_production("tomato", 10, Some(50), 99).unwrap();

        assert_eq!(
            ledger.events(),
            &[
                LedgerEvent::ProductionAdded {
                    category: "tomato".into(),
                    value: 500,
                },
                LedgerEvent::HotBatchMinted {
                    category: "tomato".into(),
                    amount: 500,
                    expiration_height: 99,
                },
            ]
        );
    }

    #[test]
    fn test_register_requires_initialization() {
        let mut ledger: Ledger = Ledger::new(PolicyConfig::default(), PriceCatalog::new());
        assert_eq!(
            ledger.register_production("corn", 1, Some(1), 10),
            Err(LedgerError::NotInitialized)
        );
    }
}
