//! Property-based tests for the tokenizers
//!
//! Whatever the input and language, the output must describe the input exactly: leaf
//! segments concatenate back to it, and stripping the span markup and unescaping the HTML
//! gives it back too.

use hilite::{registry, Token};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

static SPAN_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span class="[^"]*">|</span>"#).unwrap());

const LANGUAGES: &[&str] = &[
    "js", "py", "css", "json", "bash", "sql", "java", "yaml", "html", "yml", "cobol",
];

const FRAGMENTS: &[&str] = &[
    "//", "/*", "*/", "\"", "'", "`", "<", ">", "</", "<!--", "-->", "<!DOCTYPE", "=", "if",
    "def", "SELECT", " ", "\n", "\t", "#", "$x", "${y}", "1.5", "0x1F", "@d", "{", "}", "(",
    ")", "[", "]", "a", "div", "class", ":", ";", ",", "\\", "&", "!important", "é", "→",
    "true", "key:", "-",
];

/// Code-shaped inputs: concatenations of fragments every grammar reacts to
fn code_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.concat())
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![code_strategy(), "\\PC*"]
}

fn language_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LANGUAGES)
}

fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

fn assert_well_formed(tokens: &[Token], bounds: std::ops::Range<usize>) {
    let mut cursor = bounds.start;
    for token in tokens {
        assert!(token.span.start >= cursor, "tokens overlap or are unsorted");
        assert!(token.span.end <= bounds.end, "token escapes its parent");
        assert!(!token.span.is_empty(), "empty token");
        assert_well_formed(&token.children, token.span.clone());
        cursor = token.span.end;
    }
}

proptest! {
    #[test]
    fn segments_concatenate_to_input(input in input_strategy(), language in language_strategy()) {
        let highlighted = registry().highlight(&input, language);
        let joined: String = highlighted.segments().iter().map(|s| s.text).collect();
        prop_assert_eq!(&joined, &input);
    }

    #[test]
    fn html_decodes_to_input(input in input_strategy(), language in language_strategy()) {
        let html = registry().highlight(&input, language).to_html();
        let stripped = SPAN_MARKUP.replace_all(&html, "");
        prop_assert!(!stripped.contains('<'));
        prop_assert_eq!(&unescape(&stripped), &input);
    }

    #[test]
    fn tokens_are_sorted_disjoint_and_nested(input in input_strategy(), language in language_strategy()) {
        let highlighted = registry().highlight(&input, language);
        assert_well_formed(highlighted.tokens(), 0..input.len());
    }
}
