//! Production batches and the collateral registry.

use std::collections::BTreeMap;

/// Identifier for a registered production batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchId(pub u64);

impl BatchId {
    /// Create a new batch ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a batch. A batch never returns to `Active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchStatus {
    /// Live collateral, counted in `total_production`.
    Active,
    /// Fully burned out of the registry.
    Retired,
}

/// A pledged real-world good backing the currency.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionBatch {
    /// Registry-assigned identifier.
    pub id: BatchId,

    /// Product category the batch belongs to.
    pub category: String,

    /// Quantity pledged, in units of the category.
    pub quantity: i128,

    /// Price per unit at registration time.
    pub unit_price: i128,

    /// Remaining backing value. Starts at `quantity × unit_price` and only
    /// decreases, through burns of rotted collateral.
    pub value: i128,

    /// Height after which the batch counts as rotted if still active.
    pub expiration_height: u64,

    /// Current lifecycle status.
    pub status: BatchStatus,
}

impl ProductionBatch {
    /// Whether the batch still backs circulating supply.
    pub fn is_active(&self) -> bool {
        self.status == BatchStatus::Active
    }

    /// Whether the batch is past its expiration and still unburned at
    /// `height`.
    pub fn is_rotted_at(&self, height: u64) -> bool {
        self.is_active() && self.expiration_height < height
    }
}

/// Registry of collateral batches.
///
/// Owns batch lifecycle: batches enter Active through
/// [register](ProductionRegistry::register) and leave only through
/// [retire_rotted](ProductionRegistry::retire_rotted).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionRegistry {
    batches: BTreeMap<BatchId, ProductionBatch>,
    next_id: u64,
}

impl ProductionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new active batch and return its ID.
    ///
    /// The caller has already validated the fields and computed `value`
    /// with checked arithmetic.
    pub fn register(
        &mut self,
        category: String,
        quantity: i128,
        unit_price: i128,
        value: i128,
        expiration_height: u64,
    ) -> BatchId {
        let id = BatchId::new(self.next_id);
        self.next_id += 1;
        self.batches.insert(
            id,
            ProductionBatch {
                id,
                category,
                quantity,
                unit_price,
                value,
                expiration_height,
                status: BatchStatus::Active,
            },
        );
        id
    }

    /// Look up a batch by ID.
    pub fn batch(&self, id: BatchId) -> Option<&ProductionBatch> {
        self.batches.get(&id)
    }

    /// Sum of remaining value over active batches.
    pub fn active_value(&self) -> i128 {
        self.batches
            .values()
            .filter(|b| b.is_active())
            .map(|b| b.value)
            .sum()
    }

    /// Sum of remaining value over active batches whose expiration height
    /// has passed at `height`.
    pub fn rotted_value(&self, height: u64) -> i128 {
        self.batches
            .values()
            .filter(|b| b.is_rotted_at(height))
            .map(|b| b.value)
            .sum()
    }

    /// Retire `value` worth of rotted collateral, oldest expiration first.
    ///
    /// Requires `value <= rotted_value(height)`; the caller checks this.
    /// The last batch touched may be reduced rather than retired, in which
    /// case it stays active with its remaining value. Returns the IDs of
    /// fully retired batches.
    pub fn retire_rotted(&mut self, height: u64, value: i128) -> Vec<BatchId> {
        debug_assert!(value <= self.rotted_value(height));

        let mut order: Vec<(u64, BatchId)> = self
            .batches
            .values()
            .filter(|b| b.is_rotted_at(height))
            .map(|b| (b.expiration_height, b.id))
            .collect();
        order.sort_unstable();

        let mut remaining = value;
        let mut retired = Vec::new();
        for (_, id) in order {
            if remaining == 0 {
                break;
            }
            let Some(batch) = self.batches.get_mut(&id) else {
                continue;
            };
            if batch.value <= remaining {
                remaining -= batch.value;
                batch.value = 0;
                batch.status = BatchStatus::Retired;
                retired.push(id);
            } else {
                batch.value -= remaining;
                remaining = 0;
            }
        }
        retired
    }

    /// Iterate over all batches, including retired ones.
    pub fn iter(&self) -> impl Iterator<Item = &ProductionBatch> {
        self.batches.values()
    }

    /// Iterate over active batches.
    pub fn active_batches(&self) -> impl Iterator<Item = &ProductionBatch> {
        self.batches.values().filter(|b| b.is_active())
    }

    /// Number of batches ever registered.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Returns true if nothing was ever registered.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
