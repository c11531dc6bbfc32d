//! Error types for grammar construction and language lookup

use std::fmt;

/// Errors raised while building grammars or looking languages up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// No syntax is registered under the (normalized) language name
    UnknownLanguage(String),
    /// A configured alias names neither a language nor another alias
    UnknownAliasTarget { alias: String, target: String },
    /// A grammar rule failed to compile
    InvalidPattern {
        language: String,
        pattern: String,
        message: String,
    },
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightError::UnknownLanguage(name) => write!(f, "Unknown language: {}", name),
            HighlightError::UnknownAliasTarget { alias, target } => write!(
                f,
                "Alias '{}' points at unknown language '{}'",
                alias, target
            ),
            HighlightError::InvalidPattern {
                language,
                pattern,
                message,
            } => write!(
                f,
                "Invalid pattern in grammar '{}': {}\n{}",
                language, pattern, message
            ),
        }
    }
}

impl std::error::Error for HighlightError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_language() {
        let err = HighlightError::UnknownLanguage("cobol".to_string());
        assert_eq!(err.to_string(), "Unknown language: cobol");
    }

    #[test]
    fn test_display_unknown_alias_target() {
        let err = HighlightError::UnknownAliasTarget {
            alias: "ecma".to_string(),
            target: "javascrpt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Alias 'ecma' points at unknown language 'javascrpt'"
        );
    }

    #[test]
    fn test_display_invalid_pattern() {
        let err = HighlightError::InvalidPattern {
            language: "ini".to_string(),
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("'ini'"));
        assert!(text.contains("unclosed group"));
    }
}
