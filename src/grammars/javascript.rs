//! JavaScript

use super::{C_COMMENT, DECIMAL_NUMBER, QUOTED_STRING};
use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "js";
pub(super) const DESCRIPTION: &str = "JavaScript";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(C_COMMENT, TokenKind::Comment),
    RuleDef::new(QUOTED_STRING, TokenKind::String),
    // Template literals. A `${...}` interpolation may hold backticks of its own; a lone `$`
    // is ordinary content.
    RuleDef::new(r"`(?:[^`\\$]|\\[\s\S]|\$\{[^}]*\}|\$)*`", TokenKind::String),
    RuleDef::new(
        r"(?-u:\b)(?:const|let|var|function|return|if|else|for|while|do|switch|case|break|continue|try|catch|finally|throw|new|class|extends|import|export|default|async|await|yield|typeof|instanceof|delete|void|this|super|static|get|set|in|of)(?-u:\b)",
        TokenKind::Keyword,
    ),
    RuleDef::new(DECIMAL_NUMBER, TokenKind::Number),
    RuleDef::focused(r"(?-u:\b)([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(", TokenKind::Function, 1),
    RuleDef::new(r"[-+*/%=<>!&|^~?:]", TokenKind::Operator),
    RuleDef::new(r"[{}\[\]();,.]", TokenKind::Punctuation),
];
