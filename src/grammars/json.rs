//! JSON

use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "json";
pub(super) const DESCRIPTION: &str = "JSON";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(r#""(?:[^"\\]|\\.)*""#, TokenKind::String),
    RuleDef::new(r"(?-u:\b)(?:true|false|null)(?-u:\b)", TokenKind::Boolean),
    RuleDef::new(r"(?-u:\b)-?[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?(?-u:\b)", TokenKind::Number),
    RuleDef::new(r"[{}\[\]:,]", TokenKind::Punctuation),
];
