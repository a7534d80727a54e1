//! Reply selection and exchange recording.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::category::{Category, CategoryTable};
use crate::error::ChatError;
use crate::ledger::{Exchange, Ledger};
use crate::source::{Clock, ReplyPicker};
use crate::template;

/// Picks replies for a tag and records each exchange in its ledger.
pub struct Responder {
    table: Arc<CategoryTable>,
    picker: Box<dyn ReplyPicker>,
    clock: Box<dyn Clock>,
    ledger: Ledger,
}

impl Responder {
    pub fn new(
        table: Arc<CategoryTable>,
        picker: Box<dyn ReplyPicker>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            table,
            picker,
            clock,
            ledger: Ledger::new(),
        }
    }

    /// Produce a reply for `tag` and append the exchange to the ledger.
    ///
    /// `original_input` is stored verbatim. Fails with
    /// [`ChatError::UnknownCategory`] if `tag` is not in the table.
    pub fn respond(&mut self, tag: &str, original_input: &str) -> Result<String, ChatError> {
        let now = self.clock.now();
        let reply = self.pick_at(tag, now)?;
        self.ledger.append(Exchange {
            input: original_input.to_string(),
            reply: reply.clone(),
            timestamp: now,
        });
        debug!(tag, entries = self.ledger.len(), "Exchange recorded");
        Ok(reply)
    }

    /// Pick and render a reply for `tag` without recording anything.
    pub fn sample(&mut self, tag: &str) -> Result<String, ChatError> {
        let now = self.clock.now();
        self.pick_at(tag, now)
    }

    fn pick_at(&mut self, tag: &str, now: DateTime<Local>) -> Result<String, ChatError> {
        let category = lookup(&self.table, tag)?;
        let replies = category.replies();
        let idx = self.picker.pick(replies.len());
        Ok(template::render_time(&replies[idx], now))
    }

    /// The reply pool for `tag` as it renders right now.
    pub fn reply_pool(&self, tag: &str) -> Result<Vec<String>, ChatError> {
        let category = lookup(&self.table, tag)?;
        let now = self.clock.now();
        Ok(category
            .replies()
            .iter()
            .map(|r| template::render_time(r, now))
            .collect())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn clear(&mut self) {
        self.ledger.clear();
    }
}

fn lookup<'a>(table: &'a CategoryTable, tag: &str) -> Result<&'a Category, ChatError> {
    table
        .get(tag)
        .ok_or_else(|| ChatError::UnknownCategory(tag.to_string()))
}
