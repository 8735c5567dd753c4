//! Property tests for the core numeric invariants.

use dmt_ledger_core::{
    AccountId, Ledger, LedgerError, PolicyConfig, PriceCatalog,
};
use proptest::prelude::*;

const TREASURY: AccountId = AccountId(1);
const POOL: AccountId = AccountId(2);

/// Ledger with `supply` tokens minted into the distribution pool.
fn funded_ledger(supply: i128) -> Ledger {
    let mut ledger = Ledger::new(
        PolicyConfig::default().with_hot_batch_threshold(0),
        PriceCatalog::new(),
    );
    ledger.initialize(TREASURY, POOL).unwrap();
    ledger
        .register_production("grain", supply, Some(1), u64::MAX)
        .unwrap();
    ledger.check_and_mint().unwrap();
    ledger
}

/// An arbitrary (frequently invalid) transfer attempt between a handful of
/// accounts.
fn transfer_op() -> impl Strategy<Value = (u64, u64, i128, i128)> {
    (1u64..=6, 1u64..=6, -10i128..5_000, -10i128..2_000)
}

proptest! {
    /// No sequence of transfer attempts, valid or not, moves the supply or
    /// breaks conservation.
    #[test]
    fn conservation_under_transfers(ops in proptest::collection::vec(transfer_op(), 1..60)) {
        let mut ledger = funded_ledger(100_000);

        for (from, to, amount, tax) in ops {
            // Failures are expected along the way; they must be clean.
            let _ = ledger.transfer_with_tax(
                AccountId::new(from),
                AccountId::new(to),
                amount,
                tax,
            );
            prop_assert_eq!(ledger.total_supply(), 100_000);
            prop_assert!(ledger.verify_invariants().is_ok());
        }
    }

    /// Minting closes exactly the production/supply gap and is idempotent.
    #[test]
    fn mint_closes_exact_gap(quantity in 1i128..10_000, unit_price in 1i128..10_000) {
        let mut ledger = Ledger::new(
            PolicyConfig::default().with_hot_batch_threshold(0),
            PriceCatalog::new(),
        );
        ledger.initialize(TREASURY, POOL).unwrap();
        ledger
            .register_production("grain", quantity, Some(unit_price), u64::MAX)
            .unwrap();

        let minted = ledger.check_and_mint().unwrap();
        prop_assert_eq!(minted, quantity * unit_price);
        prop_assert_eq!(ledger.total_supply(), ledger.total_production());
        prop_assert_eq!(ledger.check_and_mint().unwrap(), 0);
        prop_assert!(ledger.verify_invariants().is_ok());
    }

    /// Burns are bounded by rotted collateral; a successful burn moves
    /// production and supply by exactly the requested value, and a failed
    /// one moves nothing.
    #[test]
    fn burn_bounds(registered in 1i128..10_000, requested in 1i128..20_000) {
        let mut ledger = Ledger::new(
            PolicyConfig::default().with_hot_batch_threshold(0),
            PriceCatalog::new(),
        );
        ledger.initialize(TREASURY, POOL).unwrap();
        ledger
            .register_production("tomato", registered, Some(1), 10)
            .unwrap();
        ledger.check_and_mint().unwrap();
        ledger.advance_height(11).unwrap();

        let result = ledger.burn_rotting_assets(requested);
        if requested <= registered {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ledger.total_production(), registered - requested);
            prop_assert_eq!(ledger.total_supply(), registered - requested);
        } else {
            prop_assert_eq!(
                result,
                Err(LedgerError::InsufficientCollateral {
                    registered,
                    requested,
                })
            );
            prop_assert_eq!(ledger.total_production(), registered);
            prop_assert_eq!(ledger.total_supply(), registered);
        }
        prop_assert!(ledger.verify_invariants().is_ok());
    }

    /// A rejected registration leaves every aggregate untouched.
    #[test]
    fn failed_registration_changes_nothing(quantity in prop_oneof![Just(0i128), Just(-1i128), Just(i128::MAX)]) {
        let mut ledger = funded_ledger(1_000);
        let production = ledger.total_production();
        let supply = ledger.total_supply();
        let batches = ledger.active_batches().count();

        // quantity MAX overflows against unit price 2; the others are
        // non-positive.
        let result = ledger.register_production("grain", quantity, Some(2), u64::MAX);
        prop_assert!(result.is_err());

        prop_assert_eq!(ledger.total_production(), production);
        prop_assert_eq!(ledger.total_supply(), supply);
        prop_assert_eq!(ledger.active_batches().count(), batches);
        prop_assert!(ledger.verify_invariants().is_ok());
    }
}
