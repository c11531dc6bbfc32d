//! SQL

use crate::grammar::RuleDef;
use crate::token::TokenKind;

pub(super) const NAME: &str = "sql";
pub(super) const DESCRIPTION: &str = "SQL";

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(r"(?mR)--.*$|/\*[\s\S]*?\*/", TokenKind::Comment),
    RuleDef::new(r"'(?:[^'\\]|\\.)*'", TokenKind::String),
    RuleDef::new(
        r"(?i-u)\b(?:SELECT|FROM|WHERE|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|TABLE|INDEX|VIEW|JOIN|INNER|LEFT|RIGHT|OUTER|ON|AS|AND|OR|NOT|IN|LIKE|BETWEEN|ORDER|BY|GROUP|HAVING|LIMIT|OFFSET|UNION|ALL|DISTINCT|COUNT|SUM|AVG|MAX|MIN|NULL|IS|EXISTS|CASE|WHEN|THEN|ELSE|END|PRIMARY|KEY|FOREIGN|REFERENCES|CONSTRAINT|DEFAULT|AUTO_INCREMENT|VARCHAR|INT|INTEGER|TEXT|DATE|DATETIME|TIMESTAMP|BOOLEAN|FLOAT|DOUBLE|DECIMAL)\b",
        TokenKind::Keyword,
    ),
    RuleDef::new(r"(?-u:\b)[0-9]+\.?[0-9]*(?-u:\b)", TokenKind::Number),
    RuleDef::new(r"[-=<>!+*/%]", TokenKind::Operator),
    RuleDef::new(r"[();,.]", TokenKind::Punctuation),
];
