//! Bash and POSIX shell

use super::{HASH_COMMENT, QUOTED_STRING};
use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "bash";
pub(super) const DESCRIPTION: &str = "Bash / shell scripts";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(HASH_COMMENT, TokenKind::Comment),
    RuleDef::new(QUOTED_STRING, TokenKind::String),
    RuleDef::new(
        r"\$\{?[a-zA-Z_][a-zA-Z0-9_]*\}?|\$[0-9]+|\$[@*#?$!-]",
        TokenKind::Variable,
    ),
    RuleDef::new(
        r"(?-u:\b)(?:if|then|else|elif|fi|case|esac|for|while|do|done|function|return|exit|break|continue|in|select|until)(?-u:\b)",
        TokenKind::Keyword,
    ),
    RuleDef::new(r"[|&;<>()$`\\]", TokenKind::Operator),
];
