//! Error types for the chat engine.

/// Errors from the chat engine.
///
/// Every variant except `UnknownCategory` and `StateUnavailable` is a
/// startup failure raised while the category table is built.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("category tag cannot be empty")]
    EmptyTag,
    #[error("duplicate category tag: {0}")]
    DuplicateTag(String),
    #[error("category '{0}' has no replies")]
    NoReplies(String),
    #[error("no fallback category (one category must have no patterns)")]
    NoFallback,
    #[error("more than one category has no patterns: {}", .0.join(", "))]
    MultipleFallbacks(Vec<String>),
    #[error("invalid pattern '{pattern}' in category '{tag}': {reason}")]
    InvalidPattern {
        tag: String,
        pattern: String,
        reason: String,
    },
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("responder state unavailable: {0}")]
    StateUnavailable(String),
}

impl ChatError {
    /// Whether this error means the category table could not be built.
    pub fn is_config_error(&self) -> bool {
        !matches!(
            self,
            ChatError::UnknownCategory(_) | ChatError::StateUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::EmptyTag.to_string(), "category tag cannot be empty");

        let err = ChatError::DuplicateTag("greetings".to_string());
        assert_eq!(err.to_string(), "duplicate category tag: greetings");

        let err = ChatError::NoReplies("age".to_string());
        assert_eq!(err.to_string(), "category 'age' has no replies");

        let err = ChatError::NoFallback;
        assert_eq!(
            err.to_string(),
            "no fallback category (one category must have no patterns)"
        );

        let err = ChatError::UnknownCategory("weather2".to_string());
        assert_eq!(err.to_string(), "unknown category: weather2");

        let err = ChatError::StateUnavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "responder state unavailable: lock poisoned");
    }

    #[test]
    fn test_multiple_fallbacks_lists_tags() {
        let err = ChatError::MultipleFallbacks(vec!["default".to_string(), "other".to_string()]);
        assert_eq!(
            err.to_string(),
            "more than one category has no patterns: default, other"
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = ChatError::InvalidPattern {
            tag: "help".to_string(),
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'('"));
        assert!(msg.contains("'help'"));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn test_is_config_error() {
        assert!(ChatError::NoFallback.is_config_error());
        assert!(ChatError::EmptyTag.is_config_error());
        assert!(ChatError::MultipleFallbacks(vec![]).is_config_error());
        assert!(!ChatError::UnknownCategory("x".to_string()).is_config_error());
        assert!(!ChatError::StateUnavailable("x".to_string()).is_config_error());
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::NoReplies("name".to_string()));
        assert!(dbg.contains("NoReplies"));
        assert!(dbg.contains("name"));
    }
}
