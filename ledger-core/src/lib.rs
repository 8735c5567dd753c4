//! Demeter's production-backed currency ledger.
//!
//! The ledger is a state machine that keeps a circulating token supply
//! matched to the value of real-world production pledged as collateral:
//!
//! 1. **Registration**: producers pledge goods; each batch is valued at
//!    `quantity × unit_price` (caller-asserted or resolved through an
//!    injected price oracle) and carries an expiration height.
//! 2. **Seigniorage**: `check_and_mint` mints exactly the gap between live
//!    collateral value and supply into the distribution pool. It never
//!    mints a negative amount and never contracts.
//! 3. **Circulation tax**: `transfer_with_tax` splits a levy off every
//!    transfer into the treasury. Supply-neutral.
//! 4. **Decay**: goods that expire unsold are burned out of both the
//!    registry and the supply by `burn_rotting_assets`, keeping the backing
//!    ratio intact.
//!
//! | Operation | Collateral | Supply | Funded account |
//! |---|---|---|---|
//! | `register_production` | +value | — | — |
//! | `check_and_mint` | — | +gap | distribution pool |
//! | `transfer_with_tax` | — | — | treasury (tax) |
//! | `burn_rotting_assets` | −value | −value | burn source debited |
//!
//! ## Invariants
//!
//! After every committed operation: supply equals the sum of balances;
//! recorded production equals the remaining value of active batches; no
//! balance is negative; the policy engine never mints beyond the current
//! production/supply gap. [`Ledger::verify_invariants`] checks all of this.
//!
//! ## Execution model
//!
//! There are no ambient globals and no background scheduler: every state
//! transition is a synchronous call on an explicit [`Ledger`] value, and
//! each operation validates all of its preconditions before its first
//! write, so an error never leaves partial state. Events go to an
//! append-only log with optional channel subscribers and are never read
//! back by the core.

mod account;
mod batch;
mod burn;
mod config;
mod error;
mod events;
mod ledger;
mod mint;
mod oracle;
mod register;
mod transfer;
mod velocity;

pub use account::{AccountId, BalanceStore};
pub use batch::{BatchId, BatchStatus, ProductionBatch, ProductionRegistry};
pub use config::{BurnSource, PolicyConfig};
pub use error::{ErrorClass, LedgerError, LedgerResult};
pub use events::{EventLog, LedgerEvent};
pub use ledger::{InvariantViolation, Ledger, LedgerPhase};
#[cfg(feature = "serde")]
pub use ledger::LedgerSnapshot;
pub use oracle::{PriceCatalog, PriceOracle};
pub use velocity::VelocityTracker;
