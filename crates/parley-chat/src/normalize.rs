//! Utterance normalization applied before pattern matching.

/// Lower-case `text`, trim it, and collapse every whitespace run to one space.
///
/// Returns a new string; the caller's text is left untouched so the ledger
/// can record it verbatim.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
