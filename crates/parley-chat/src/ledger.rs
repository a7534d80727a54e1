//! Conversation history ledger.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One recorded turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Utterance exactly as the caller passed it.
    pub input: String,
    pub reply: String,
    pub timestamp: DateTime<Local>,
}

/// Append-only, chronologically ordered list of exchanges.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Exchange>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    pub fn entries(&self) -> &[Exchange] {
        &self.entries
    }

    /// Owned copy of the entries; later appends do not affect it.
    pub fn snapshot(&self) -> Vec<Exchange> {
        self.entries.clone()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
