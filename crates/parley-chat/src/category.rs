//! Compiled category table.
//!
//! Built once from [`CategoryConfig`] rules and never mutated afterwards.

use std::collections::HashSet;

use parley_core::config::CategoryConfig;
use regex::{Regex, RegexBuilder};
use tracing::{debug, error};

use crate::error::ChatError;
use crate::template;

/// A named rule group: compiled patterns plus its reply pool.
#[derive(Debug)]
pub struct Category {
    tag: String,
    patterns: Vec<Regex>,
    replies: Vec<String>,
}

impl Category {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Reply templates with `{name}` already substituted.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Whether any pattern matches anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// Ordered category rules plus the single fallback category.
#[derive(Debug)]
pub struct CategoryTable {
    /// Pattern categories in declaration order.
    rules: Vec<Category>,
    fallback: Category,
}

impl CategoryTable {
    /// Compile and validate a table.
    ///
    /// Fails if a tag is empty or repeated, if a category has no replies, if
    /// a pattern does not compile, or unless exactly one category has an
    /// empty pattern set.
    pub fn build(configs: &[CategoryConfig], bot_name: &str) -> Result<Self, ChatError> {
        Self::compile(configs, bot_name).inspect_err(|e| {
            error!(error = %e, "Category table rejected");
        })
    }

    fn compile(configs: &[CategoryConfig], bot_name: &str) -> Result<Self, ChatError> {
        let mut seen = HashSet::new();
        for cfg in configs {
            if cfg.tag.trim().is_empty() {
                return Err(ChatError::EmptyTag);
            }
            if !seen.insert(cfg.tag.as_str()) {
                return Err(ChatError::DuplicateTag(cfg.tag.clone()));
            }
            if cfg.replies.is_empty() {
                return Err(ChatError::NoReplies(cfg.tag.clone()));
            }
        }

        let fallbacks: Vec<&CategoryConfig> = configs.iter().filter(|c| c.is_fallback()).collect();
        let fallback_cfg = match fallbacks.as_slice() {
            [] => return Err(ChatError::NoFallback),
            [one] => *one,
            many => {
                return Err(ChatError::MultipleFallbacks(
                    many.iter().map(|c| c.tag.clone()).collect(),
                ))
            }
        };

        let mut rules = Vec::with_capacity(configs.len() - 1);
        for cfg in configs.iter().filter(|c| !c.is_fallback()) {
            rules.push(compile_category(cfg, bot_name)?);
        }
        let fallback = compile_category(fallback_cfg, bot_name)?;

        debug!(
            categories = rules.len(),
            fallback = %fallback.tag,
            "Category table compiled"
        );
        Ok(Self { rules, fallback })
    }

    /// Pattern categories in matching order (fallback excluded).
    pub fn rules(&self) -> &[Category] {
        &self.rules
    }

    pub fn fallback(&self) -> &Category {
        &self.fallback
    }

    /// Look up a category by tag, including the fallback.
    pub fn get(&self, tag: &str) -> Option<&Category> {
        if self.fallback.tag == tag {
            return Some(&self.fallback);
        }
        self.rules.iter().find(|c| c.tag == tag)
    }

    /// All tags in declaration order, fallback last.
    pub fn tags(&self) -> Vec<&str> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|c| c.tag.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

fn compile_category(cfg: &CategoryConfig, bot_name: &str) -> Result<Category, ChatError> {
    let patterns = cfg
        .patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|e| ChatError::InvalidPattern {
                    tag: cfg.tag.clone(),
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let replies = cfg
        .replies
        .iter()
        .map(|r| template::render_name(r, bot_name))
        .collect();

    Ok(Category {
        tag: cfg.tag.clone(),
        patterns,
        replies,
    })
}
