//! YAML

use super::{HASH_COMMENT, QUOTED_STRING};
use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "yaml";
pub(super) const DESCRIPTION: &str = "YAML";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(HASH_COMMENT, TokenKind::Comment),
    RuleDef::new(QUOTED_STRING, TokenKind::String),
    // Anchors and aliases
    RuleDef::new(r"[&*][a-zA-Z0-9_-]+", TokenKind::Variable),
    // Mapping keys; indentation and the colon stay unclaimed
    RuleDef::focused(r"(?m)^([ \t]*)([a-zA-Z0-9_-]+)[ \t]*:", TokenKind::Property, 2),
    RuleDef::new(
        r"(?i-u)\b(?:true|false|yes|no|on|off|null|~)\b",
        TokenKind::Boolean,
    ),
    RuleDef::new(r"(?-u:\b)-?[0-9]+\.?[0-9]*(?-u:\b)", TokenKind::Number),
];
