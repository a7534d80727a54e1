//! Chat engine: the classifier and responder wired behind one handle.

use std::sync::{Arc, Mutex, MutexGuard};

use parley_core::config::ParleyConfig;
use tracing::info;

use crate::catalog;
use crate::category::CategoryTable;
use crate::classifier::Classifier;
use crate::error::ChatError;
use crate::ledger::Exchange;
use crate::responder::Responder;
use crate::source::{Clock, RandomPicker, ReplyPicker, SystemClock};

/// Public entry point used by the interactive shell.
///
/// The category table is shared read-only; responder state (ledger, random
/// source, clock) sits behind a mutex so the engine can be used through `&self`.
pub struct ChatEngine {
    bot_name: String,
    classifier: Classifier,
    responder: Mutex<Responder>,
}

impl ChatEngine {
    /// Build an engine from configuration with OS randomness (or the
    /// configured seed) and the system clock.
    pub fn new(config: &ParleyConfig) -> Result<Self, ChatError> {
        let picker = match config.responder.seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::from_os(),
        };
        Self::with_sources(config, Box::new(picker), Box::new(SystemClock))
    }

    /// Build an engine with explicit random and clock sources.
    pub fn with_sources(
        config: &ParleyConfig,
        picker: Box<dyn ReplyPicker>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ChatError> {
        let builtin;
        let rules = if config.categories.is_empty() {
            builtin = catalog::builtin();
            &builtin
        } else {
            &config.categories
        };

        let bot_name = config.general.bot_name.clone();
        let table = Arc::new(CategoryTable::build(rules, &bot_name)?);
        info!(
            bot_name = %bot_name,
            categories = table.len(),
            builtin = config.categories.is_empty(),
            "Chat engine ready"
        );

        Ok(Self {
            bot_name,
            classifier: Classifier::new(Arc::clone(&table)),
            responder: Mutex::new(Responder::new(table, picker, clock)),
        })
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Classify an utterance. Never fails; unmatched input gets the fallback tag.
    pub fn classify(&self, utterance: &str) -> &str {
        self.classifier.classify(utterance)
    }

    /// Reply for `tag`, recording `original_input` in the ledger.
    pub fn respond(&self, tag: &str, original_input: &str) -> Result<String, ChatError> {
        self.lock()?.respond(tag, original_input)
    }

    /// Classify and respond in one step.
    pub fn reply(&self, utterance: &str) -> Result<String, ChatError> {
        let tag = self.classify(utterance);
        self.respond(tag, utterance)
    }

    /// Pick a reply for `tag` without recording it.
    pub fn sample(&self, tag: &str) -> Result<String, ChatError> {
        self.lock()?.sample(tag)
    }

    /// The reply pool for `tag`, rendered at the engine clock's current time.
    pub fn reply_pool(&self, tag: &str) -> Result<Vec<String>, ChatError> {
        self.lock()?.reply_pool(tag)
    }

    /// Snapshot of the ledger in chronological order.
    pub fn history(&self) -> Result<Vec<Exchange>, ChatError> {
        Ok(self.lock()?.ledger().snapshot())
    }

    /// Empty the ledger.
    pub fn clear(&self) -> Result<(), ChatError> {
        let mut responder = self.lock()?;
        let dropped = responder.ledger().len();
        responder.clear();
        info!(dropped, "Conversation history cleared");
        Ok(())
    }

    /// Category tags in declaration order, fallback last.
    pub fn tags(&self) -> Vec<&str> {
        self.classifier.table().tags()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Responder>, ChatError> {
        self.responder
            .lock()
            .map_err(|e| ChatError::StateUnavailable(format!("responder lock poisoned: {}", e)))
    }
}
