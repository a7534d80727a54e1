//! Utterance classification.
//!
//! First match wins: categories are tried in declaration order and the
//! first one with any matching pattern is returned. There is no scoring.

use std::sync::Arc;

use tracing::debug;

use crate::category::CategoryTable;
use crate::normalize::normalize;

/// Maps raw utterances to category tags.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<CategoryTable>,
}

impl Classifier {
    pub fn new(table: Arc<CategoryTable>) -> Self {
        Self { table }
    }

    /// Classify an utterance, returning the winning tag.
    ///
    /// Unmatched input (including empty or blank text) yields the fallback
    /// tag; this never fails.
    pub fn classify(&self, utterance: &str) -> &str {
        let text = normalize(utterance);

        if !text.is_empty() {
            for category in self.table.rules() {
                if category.matches(&text) {
                    debug!(tag = category.tag(), "Utterance classified");
                    return category.tag();
                }
            }
        }

        let fallback = self.table.fallback().tag();
        debug!(tag = fallback, "No category matched, using fallback");
        fallback
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, builtin};
    use parley_core::config::CategoryConfig;

    fn classifier() -> Classifier {
        Classifier::new(Arc::new(CategoryTable::build(&builtin(), "ChatBot").unwrap()))
    }

    // -----------------------------------------------------------------
    // Built-in categories
    // -----------------------------------------------------------------

    #[test]
    fn test_greetings() {
        let c = classifier();
        assert_eq!(c.classify("Hello there!"), catalog::GREETINGS);
        assert_eq!(c.classify("hey"), catalog::GREETINGS);
        assert_eq!(c.classify("Good morning to you"), catalog::GREETINGS);
        assert_eq!(c.classify("what's up"), catalog::GREETINGS);
    }

    #[test]
    fn test_how_are_you() {
        let c = classifier();
        assert_eq!(c.classify("How are you?"), catalog::HOW_ARE_YOU);
        assert_eq!(c.classify("how's it going"), catalog::HOW_ARE_YOU);
    }

    #[test]
    fn test_goodbye() {
        let c = classifier();
        assert_eq!(c.classify("bye"), catalog::GOODBYE);
        assert_eq!(c.classify("I gotta go"), catalog::GOODBYE);
        assert_eq!(c.classify("see you tomorrow"), catalog::GOODBYE);
    }

    #[test]
    fn test_name() {
        let c = classifier();
        assert_eq!(c.classify("what's your name?"), catalog::NAME);
        assert_eq!(c.classify("Who are you"), catalog::NAME);
    }

    #[test]
    fn test_age() {
        let c = classifier();
        assert_eq!(c.classify("How old are you?"), catalog::AGE);
        assert_eq!(c.classify("when were you born"), catalog::AGE);
    }

    #[test]
    fn test_help() {
        let c = classifier();
        assert_eq!(c.classify("help"), catalog::HELP);
        assert_eq!(c.classify("what can you do?"), catalog::HELP);
    }

    #[test]
    fn test_weather() {
        let c = classifier();
        assert_eq!(c.classify("Is it going to rain"), catalog::WEATHER);
        assert_eq!(c.classify("so cold"), catalog::WEATHER);
    }

    #[test]
    fn test_time() {
        let c = classifier();
        assert_eq!(c.classify("What time is it?"), catalog::TIME);
        assert_eq!(c.classify("what's the date"), catalog::TIME);
    }

    #[test]
    fn test_compliments() {
        let c = classifier();
        assert_eq!(c.classify("thank you"), catalog::COMPLIMENTS);
        assert_eq!(c.classify("Good job!"), catalog::COMPLIMENTS);
    }

    // -----------------------------------------------------------------
    // Fallback
    // -----------------------------------------------------------------

    #[test]
    fn test_unmatched_falls_back() {
        let c = classifier();
        assert_eq!(c.classify("xyzzy plugh"), catalog::DEFAULT);
        assert_eq!(c.classify("asdf 12345"), catalog::DEFAULT);
    }

    #[test]
    fn test_empty_and_blank_fall_back() {
        let c = classifier();
        assert_eq!(c.classify(""), catalog::DEFAULT);
        assert_eq!(c.classify("   "), catalog::DEFAULT);
        assert_eq!(c.classify("\t\n"), catalog::DEFAULT);
    }

    #[test]
    fn test_punctuation_and_numbers_fall_back() {
        let c = classifier();
        assert_eq!(c.classify("?!?!"), catalog::DEFAULT);
        assert_eq!(c.classify("42 1337"), catalog::DEFAULT);
    }

    #[test]
    fn test_word_boundaries() {
        let c = classifier();
        // "hi" inside "this", "sup" inside "support" must not count as greetings.
        assert_eq!(c.classify("this"), catalog::DEFAULT);
        assert_eq!(c.classify("support"), catalog::HELP);
        assert_eq!(c.classify("shipping"), catalog::DEFAULT);
    }

    // -----------------------------------------------------------------
    // Normalization
    // -----------------------------------------------------------------

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let c = classifier();
        let tag = c.classify("hello");
        assert_eq!(c.classify("HELLO"), tag);
        assert_eq!(c.classify("  hello  "), tag);
        assert_eq!(c.classify("HeLLo"), tag);
    }

    #[test]
    fn test_collapsed_whitespace_matches_phrases() {
        let c = classifier();
        assert_eq!(c.classify("how   are \t you"), catalog::HOW_ARE_YOU);
        assert_eq!(c.classify("GOOD\nMORNING"), catalog::GREETINGS);
    }

    // -----------------------------------------------------------------
    // Ordering
    // -----------------------------------------------------------------

    #[test]
    fn test_first_declared_category_wins() {
        let c = classifier();
        // Matches both greetings and how_are_you; greetings is declared first.
        assert_eq!(c.classify("hi, how are you?"), catalog::GREETINGS);
        // Matches goodbye and compliments.
        assert_eq!(c.classify("thanks, bye"), catalog::GOODBYE);
    }

    #[test]
    fn test_order_is_stable_across_calls() {
        let c = classifier();
        let first = c.classify("hello, what time is it?");
        for _ in 0..100 {
            assert_eq!(c.classify("hello, what time is it?"), first);
        }
        assert_eq!(first, catalog::GREETINGS);
    }

    #[test]
    fn test_reordering_changes_winner() {
        let configs = vec![
            CategoryConfig::new("b", &[r"\bping\b"], &["B"]),
            CategoryConfig::new("a", &[r"\bping\b"], &["A"]),
            CategoryConfig::new("fallback", &[], &["?"]),
        ];
        let c = Classifier::new(Arc::new(CategoryTable::build(&configs, "Bot").unwrap()));
        assert_eq!(c.classify("ping"), "b");
        assert_eq!(c.classify("pong"), "fallback");
    }

    #[test]
    fn test_does_not_mutate_input() {
        let c = classifier();
        let input = String::from("  HELLO  ");
        let _ = c.classify(&input);
        assert_eq!(input, "  HELLO  ");
    }
}
