//! Records produced by Congress calls, and the bus that fans them out.

use congress_ledger::LedgerEvent;
use congress_types::CongressEvent;
use serde::{Deserialize, Serialize};

/// One record in a call's receipt: either Congress's own audit event or a
/// record emitted by the governed ledger during that call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CongressRecord {
    Congress(CongressEvent),
    Ledger(LedgerEvent),
}

impl CongressRecord {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Congress(event) => event.name(),
            Self::Ledger(event) => event.name(),
        }
    }
}

impl From<CongressEvent> for CongressRecord {
    fn from(event: CongressEvent) -> Self {
        Self::Congress(event)
    }
}

impl From<LedgerEvent> for CongressRecord {
    fn from(event: LedgerEvent) -> Self {
        Self::Ledger(event)
    }
}

/// Synchronous fan-out event bus for committed call records.
///
/// Listeners are invoked inline on the calling thread, after the call has
/// committed; rejected calls never reach them.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&CongressRecord) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&CongressRecord) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, record: &CongressRecord) {
        for listener in &self.listeners {
            listener(record);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
