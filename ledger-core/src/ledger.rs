//! The ledger state machine.

use displaydoc::Display;

use crate::{
    account::{AccountId, BalanceStore},
    batch::{BatchId, ProductionBatch, ProductionRegistry},
    config::PolicyConfig,
    error::{LedgerError, LedgerResult},
    events::{EventLog, LedgerEvent},
    oracle::{PriceCatalog, PriceOracle},
    velocity::VelocityTracker,
};

/// Lifecycle phase of the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerPhase {
    /// Created but not initialized; every mutating operation is rejected.
    Uninitialized,
    /// Operational, with the two system accounts pinned for good.
    Initialized {
        treasury: AccountId,
        distribution_pool: AccountId,
    },
}

/// The complete ledger state machine.
///
/// All shared state — balances, the collateral registry, the aggregates and
/// the event log — lives behind this struct and is mutated only through the
/// operations defined on it. Each operation validates every precondition
/// before its first write, so a returned error always leaves the ledger
/// exactly as it was.
///
/// The execution substrate is expected to serialize invocations; nothing
/// here suspends mid-operation.
#[derive(Clone, Debug)]
pub struct Ledger<O: PriceOracle = PriceCatalog> {
    pub(crate) phase: LedgerPhase,
    pub(crate) config: PolicyConfig,
    pub(crate) oracle: O,
    pub(crate) balances: BalanceStore,
    pub(crate) registry: ProductionRegistry,
    pub(crate) total_production: i128,
    pub(crate) total_supply: i128,
    pub(crate) height: u64,
    pub(crate) velocity: VelocityTracker,
    pub(crate) events: EventLog,
}

impl<O: PriceOracle> Ledger<O> {
    /// Create an uninitialized ledger with the given policy and price
    /// oracle.
    pub fn new(config: PolicyConfig, oracle: O) -> Self {
        let velocity = VelocityTracker::new(config.velocity_window);
        Self {
            phase: LedgerPhase::Uninitialized,
            config,
            oracle,
            balances: BalanceStore::new(),
            registry: ProductionRegistry::new(),
            total_production: 0,
            total_supply: 0,
            height: 0,
            velocity,
            events: EventLog::new(),
        }
    }

    /// Pin the treasury and distribution pool accounts and open the ledger
    /// for business.
    ///
    /// One-shot: a second call fails with `AlreadyInitialized`. There is no
    /// reset path; a live ledger's aggregates stay auditable.
    pub fn initialize(
        &mut self,
        treasury: AccountId,
        distribution_pool: AccountId,
    ) -> LedgerResult<()> {
        if self.is_initialized() {
            return Err(LedgerError::AlreadyInitialized);
        }
        if treasury == distribution_pool {
            return Err(LedgerError::TreasuryPoolCollision);
        }
        self.phase = LedgerPhase::Initialized {
            treasury,
            distribution_pool,
        };
        tracing::info!(%treasury, %distribution_pool, "ledger initialized");
        Ok(())
    }

    /// Whether `initialize` has run.
    pub fn is_initialized(&self) -> bool {
        matches!(self.phase, LedgerPhase::Initialized { .. })
    }

    /// The two system accounts, or `NotInitialized`.
    pub(crate) fn system_accounts(&self) -> LedgerResult<(AccountId, AccountId)> {
        match self.phase {
            LedgerPhase::Initialized {
                treasury,
                distribution_pool,
            } => Ok((treasury, distribution_pool)),
            LedgerPhase::Uninitialized => Err(LedgerError::NotInitialized),
        }
    }

    /// Account accumulating transfer tax.
    pub fn treasury(&self) -> LedgerResult<AccountId> {
        self.system_accounts().map(|(treasury, _)| treasury)
    }

    /// Account receiving newly minted seigniorage.
    pub fn distribution_pool(&self) -> LedgerResult<AccountId> {
        self.system_accounts().map(|(_, pool)| pool)
    }

    /// Balance of `account`; zero for unknown accounts.
    pub fn balance(&self, account: AccountId) -> i128 {
        self.balances.balance(account)
    }

    /// Aggregate remaining value of active collateral.
    pub fn total_production(&self) -> i128 {
        self.total_production
    }

    /// Circulating token supply.
    pub fn total_supply(&self) -> i128 {
        self.total_supply
    }

    /// Chain height most recently reported by the embedding layer.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Record a new chain height.
    ///
    /// The core never polls a chain itself; heights arrive from outside and
    /// may only move forward. Re-reporting the current height is a no-op.
    pub fn advance_height(&mut self, height: u64) -> LedgerResult<()> {
        if height < self.height {
            return Err(LedgerError::HeightRegression {
                current: self.height,
                requested: height,
            });
        }
        self.height = height;
        Ok(())
    }

    /// Remaining value of active collateral past its expiration at the
    /// current height. This is the ceiling `burn_rotting_assets` enforces.
    pub fn rotted_value(&self) -> i128 {
        self.registry.rotted_value(self.height)
    }

    /// Look up a registered batch.
    pub fn batch(&self, id: BatchId) -> Option<&ProductionBatch> {
        self.registry.batch(id)
    }

    /// Iterate over active collateral batches.
    pub fn active_batches(&self) -> impl Iterator<Item = &ProductionBatch> {
        self.registry.active_batches()
    }

    /// Transfer volume within the velocity window ending at the current
    /// height.
    pub fn velocity(&self) -> i128 {
        self.velocity.windowed_total(self.height)
    }

    /// The policy parameters this ledger runs under.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Events recorded and not yet drained, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.events()
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain()
    }

    /// Register a live observer channel for future events.
    pub fn subscribe(&mut self) -> crossbeam_channel::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Check the core numeric invariants.
    ///
    /// Cheap relative to operation volume in tests, but linear in accounts
    /// and batches; production callers would run it on audit, not per
    /// operation.
    pub fn verify_invariants(&self) -> Result<(), InvariantViolation> {
        let balance_total = self.balances.total();
        if self.total_supply != balance_total {
            return Err(InvariantViolation::SupplyMismatch {
                supply: self.total_supply,
                balances: balance_total,
            });
        }

        let derived = self.registry.active_value();
        if self.total_production != derived {
            return Err(InvariantViolation::ProductionMismatch {
                recorded: self.total_production,
                derived,
            });
        }

        for (account, balance) in self.balances.iter() {
            if balance <= 0 {
                return Err(InvariantViolation::NonPositiveStoredBalance { account, balance });
            }
        }

        for batch in self.registry.iter() {
            let malformed = batch.quantity <= 0
                || batch.unit_price <= 0
                || (batch.is_active() && batch.value <= 0)
                || (!batch.is_active() && batch.value != 0);
            if malformed {
                return Err(InvariantViolation::MalformedBatch { batch: batch.id });
            }
        }

        Ok(())
    }
}

/// A broken core invariant, as reported by [Ledger::verify_invariants].
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Supply {supply} does not equal the balance total {balances}
    SupplyMismatch { supply: i128, balances: i128 },

    /// Recorded production {recorded} does not equal active batch value {derived}
    ProductionMismatch { recorded: i128, derived: i128 },

    /// Account {account} holds a non-positive stored balance {balance}
    NonPositiveStoredBalance { account: AccountId, balance: i128 },

    /// Batch {batch} carries malformed quantity, price or value
    MalformedBatch { batch: BatchId },
}

impl std::error::Error for InvariantViolation {}

/// Serializable image of the ledger's persistent state.
///
/// Captures everything except the injected oracle and live event
/// subscribers; [Ledger::restore] supplies those again. The velocity
/// tracker travels whole, window included.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LedgerSnapshot {
    pub phase: LedgerPhase,
    pub balances: BalanceStore,
    pub registry: ProductionRegistry,
    pub total_production: i128,
    pub total_supply: i128,
    pub height: u64,
    pub velocity: VelocityTracker,
    pub pending_events: Vec<LedgerEvent>,
}

#[cfg(feature = "serde")]
impl<O: PriceOracle> Ledger<O> {
    /// Capture the persistent state for storage.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            phase: self.phase,
            balances: self.balances.clone(),
            registry: self.registry.clone(),
            total_production: self.total_production,
            total_supply: self.total_supply,
            height: self.height,
            velocity: self.velocity.clone(),
            pending_events: self.events.events().to_vec(),
        }
    }

    /// Rebuild a ledger from a snapshot, a policy and a fresh oracle.
    pub fn restore(config: PolicyConfig, oracle: O, snapshot: LedgerSnapshot) -> Self {
        Self {
            phase: snapshot.phase,
            config,
            oracle,
            balances: snapshot.balances,
            registry: snapshot.registry,
            total_production: snapshot.total_production,
            total_supply: snapshot.total_supply,
            height: snapshot.height,
            velocity: snapshot.velocity,
            events: EventLog::from_events(snapshot.pending_events),
        }
    }
}
