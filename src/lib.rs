//! # hilite
//!
//! Regex grammar syntax highlighting for code blocks.
//!
//! A snippet and a language identifier go in; escaped HTML with
//! `<span class="token KIND">` wrappers comes out, ready to be inserted into a page and
//! styled by a stylesheet keyed on the [`TokenKind`] class names.
//!
//! ```ignore
//! let html = hilite::highlight("const x = 1;", "javascript");
//! ```
//!
//! File Layout
//!
//!     .
//!     ├── token.rs        # TokenKind, Token, serializable TokenView
//!     ├── tokenizer.rs    # Rule and the claim-and-mask engine
//!     ├── grammar.rs      # RuleDef tables compiled into a Grammar
//!     ├── grammars        # one const rule table per built-in language
//!     ├── markup.rs       # HTML: nested attribute pass inside each tag
//!     ├── syntax.rs       # Syntax trait shared by Grammar and MarkupSyntax
//!     ├── registry.rs     # LanguageRegistry, aliases, the process-wide default
//!     ├── highlight.rs    # Highlighted: one snippet with its tokens
//!     ├── render.rs       # HTML rendering and leaf segments
//!     ├── escape.rs       # HTML escaping
//!     └── block.rs        # <pre><code> decoration of a code-highlighter block
//!
//! Claim-and-mask
//!
//!     Each grammar is an ordered list of rules. A rule only ever sees text no earlier rule
//!     has claimed, and claims are byte ranges rather than placeholder strings, so nothing
//!     can be classified twice and rendering is a single in-order walk. The invariant the
//!     tests lean on: the leaf segments of any output concatenate back to the input.

pub mod block;
pub mod error;
pub mod escape;
pub mod grammar;
pub mod grammars;
pub mod highlight;
pub mod markup;
pub mod registry;
pub mod render;
pub mod syntax;
pub mod token;
pub mod tokenizer;

pub use block::CodeBlock;
pub use error::HighlightError;
pub use escape::escape_html;
pub use grammar::{Grammar, RuleDef};
pub use highlight::Highlighted;
pub use markup::MarkupSyntax;
pub use registry::{registry, LanguageRegistry};
pub use render::{RenderOptions, Segment};
pub use syntax::Syntax;
pub use token::{Token, TokenKind, TokenView};

/// Highlight `code` as `language` with the default registry and render options.
///
/// Unknown languages come back as escaped plain text.
pub fn highlight(code: &str, language: &str) -> String {
    registry().highlight(code, language).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_js() {
        let html = highlight("// hello\nconst x = 1;", "js");
        assert!(html.contains("<span class=\"token comment\">// hello</span>"));
        assert!(html.contains("<span class=\"token keyword\">const</span>"));
        assert!(html.contains("<span class=\"token number\">1</span>"));
    }

    #[test]
    fn test_highlight_unknown_language() {
        assert_eq!(highlight("a < b && c", "cobol"), "a &lt; b &amp;&amp; c");
    }
}
