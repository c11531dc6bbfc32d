//! Python

use super::{DECIMAL_NUMBER, HASH_COMMENT};
use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "py";
pub(super) const DESCRIPTION: &str = "Python";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(HASH_COMMENT, TokenKind::Comment),
    RuleDef::new(
        r#""""[\s\S]*?"""|'''[\s\S]*?'''|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|f"(?:[^"\\]|\\.)*"|f'(?:[^'\\]|\\.)*'"#,
        TokenKind::String,
    ),
    RuleDef::new(r"@[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Decorator),
    RuleDef::new(
        r"(?-u:\b)(?:def|class|if|elif|else|for|while|return|import|from|as|try|except|finally|raise|with|lambda|yield|pass|break|continue|and|or|not|in|is|None|True|False|async|await|global|nonlocal)(?-u:\b)",
        TokenKind::Keyword,
    ),
    RuleDef::new(DECIMAL_NUMBER, TokenKind::Number),
    RuleDef::focused(r"(?-u:\b)([a-zA-Z_][a-zA-Z0-9_]*)\s*\(", TokenKind::Function, 1),
    RuleDef::new(r"[-+*/%=<>!&|^~]", TokenKind::Operator),
    RuleDef::new(r"[{}\[\]();:,.]", TokenKind::Punctuation),
];
