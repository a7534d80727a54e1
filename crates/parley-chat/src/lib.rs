//! Rule-based conversational engine for Parley.
//!
//! Classifies utterances into intent categories by pattern matching,
//! picks a reply from the matching category's pool, and records every
//! exchange in an append-only ledger.

pub mod catalog;
pub mod category;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod normalize;
pub mod responder;
pub mod source;
pub mod template;

pub use category::{Category, CategoryTable};
pub use classifier::Classifier;
pub use engine::ChatEngine;
pub use error::ChatError;
pub use ledger::{Exchange, Ledger};
pub use responder::Responder;
pub use source::{Clock, FixedClock, RandomPicker, ReplyPicker, SystemClock};
