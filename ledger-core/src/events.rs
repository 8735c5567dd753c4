//! State-transition events for off-chain observers.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// A committed state transition, in emission order.
///
/// Events are a pure side channel: the core appends them and never reads
/// them back. Indexers either drain the log or subscribe a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerEvent {
    /// New collateral entered the registry.
    ProductionAdded { category: String, value: i128 },

    /// Supply expanded to match live collateral value.
    Minted { amount: i128 },

    /// Collateral and matching supply were retired.
    Burned { amount: i128 },

    /// A taxed transfer moved `amount` between accounts.
    TransferVelocity { amount: i128 },

    /// A batch entered the registry with a near-term expiration.
    HotBatchMinted {
        category: String,
        amount: i128,
        expiration_height: u64,
    },
}

/// Append-only event record with optional live subscribers.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    events: Vec<LedgerEvent>,
    #[cfg_attr(feature = "serde", serde(skip))]
    subscribers: Vec<Sender<LedgerEvent>>,
}

impl EventLog {
    /// Create an empty log with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from previously drained-but-unconsumed events.
    pub fn from_events(events: Vec<LedgerEvent>) -> Self {
        Self {
            events,
            subscribers: Vec::new(),
        }
    }

    /// Append an event and fan it out to live subscribers.
    ///
    /// Subscribers whose receiver was dropped are pruned here.
    pub fn publish(&mut self, event: LedgerEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        self.events.push(event);
    }

    /// Register a live observer channel.
    ///
    /// Only events published after this call are delivered; the backlog
    /// stays in the log.
    pub fn subscribe(&mut self) -> Receiver<LedgerEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
