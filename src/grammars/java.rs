//! Java

use super::{C_COMMENT, QUOTED_STRING};
use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "java";
pub(super) const DESCRIPTION: &str = "Java";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(C_COMMENT, TokenKind::Comment),
    RuleDef::new(QUOTED_STRING, TokenKind::String),
    // Annotations
    RuleDef::new(r"@[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Decorator),
    RuleDef::new(
        r"(?-u:\b)(?:abstract|assert|boolean|break|byte|case|catch|char|class|const|continue|default|do|double|else|enum|extends|final|finally|float|for|goto|if|implements|import|instanceof|int|interface|long|native|new|package|private|protected|public|return|short|static|strictfp|super|switch|synchronized|this|throw|throws|transient|try|void|volatile|while|true|false|null)(?-u:\b)",
        TokenKind::Keyword,
    ),
    RuleDef::new(
        r"(?-u:\b)(?:[0-9]+\.?[0-9]*[fFdDlL]?|\.[0-9]+[fFdD]?|0x[0-9a-fA-F]+[lL]?)(?-u:\b)",
        TokenKind::Number,
    ),
    RuleDef::focused(r"(?-u:\b)([a-zA-Z_][a-zA-Z0-9_]*)\s*\(", TokenKind::Function, 1),
    RuleDef::new(r"[-+*/%=<>!&|^~?:]", TokenKind::Operator),
    RuleDef::new(r"[{}\[\]();,.]", TokenKind::Punctuation),
];
