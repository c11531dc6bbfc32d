//! Syntax trait definition
//!
//! Every highlightable language implements [`Syntax`]. Most languages are a flat
//! [`Grammar`](crate::grammar::Grammar); HTML needs a nested pass and has its own
//! implementation in [`markup`](crate::markup).

use crate::token::Token;

/// A language the registry can highlight
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Syntax for Shouting {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn tokenize(&self, code: &str) -> Vec<Token> {
///         // claim every upper-case word as a keyword
///         todo!()
///     }
/// }
/// ```
pub trait Syntax: Send + Sync {
    /// Normalized language name (e.g., "js", "py", "html")
    fn name(&self) -> &str;

    /// Optional human readable description
    fn description(&self) -> &str {
        ""
    }

    /// Classify `code`. Returned tokens are sorted and disjoint.
    fn tokenize(&self, code: &str) -> Vec<Token>;
}
