//! CSS

use super::QUOTED_STRING;
use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "css";
pub(super) const DESCRIPTION: &str = "Cascading Style Sheets";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(r"/\*[\s\S]*?\*/", TokenKind::Comment),
    RuleDef::new(QUOTED_STRING, TokenKind::String),
    // A selector starts a line and is followed by `{`; neither the line break nor the brace
    // belongs to it.
    RuleDef::focused(
        r"(?m)(^|\n)([.#]?[a-zA-Z][a-zA-Z0-9_-]*(?:\s*[>+~]\s*[.#]?[a-zA-Z][a-zA-Z0-9_-]*)*|\*|::?[a-zA-Z-]+|\[[^\]]+\])\s*\{",
        TokenKind::Selector,
        2,
    ),
    RuleDef::new(r"!important", TokenKind::Important),
    RuleDef::new(
        r"#[0-9a-fA-F]{3,8}|rgba?\([^)]+\)|hsla?\([^)]+\)",
        TokenKind::Color,
    ),
    RuleDef::new(
        r"(?-u:\b)[0-9]+\.?[0-9]*(?:px|em|rem|%|vh|vw|pt|cm|mm|in|pc|ex|ch|vmin|vmax|deg|rad|turn|s|ms)?(?-u:\b)",
        TokenKind::Number,
    ),
    RuleDef::focused(r"([a-zA-Z-]+)\s*:", TokenKind::Property, 1),
    RuleDef::new(r"[{}:;,]", TokenKind::Punctuation),
];
