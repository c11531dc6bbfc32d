//! Built-in language grammars
//!
//! Each submodule declares one language as a `const` rule table. Order inside a table is
//! significant: comments and strings come first so that nothing inside them is classified
//! again. Patterns never use lookaround; context a rule needs to see is consumed by the
//! match and left out of the claimed group.
//!
//! HTML is not a rule table, see [`crate::markup`].

mod bash;
mod css;
mod java;
mod javascript;
mod json;
mod python;
mod sql;
mod yaml;

use crate::error::HighlightError;
use crate::grammar::{Grammar, RuleDef};
use crate::markup::MarkupSyntax;
use crate::syntax::Syntax;

/// `//` line comments and `/* */` block comments
pub(crate) const C_COMMENT: &str = r"(?mR)//.*$|/\*[\s\S]*?\*/";

/// `#` line comments
pub(crate) const HASH_COMMENT: &str = r"(?mR)#.*$";

/// Double or single quoted, backslash escapes
pub(crate) const QUOTED_STRING: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;

/// Integers, decimals, leading-dot decimals, optional exponent
pub(crate) const DECIMAL_NUMBER: &str = r"(?-u:\b)(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?(?-u:\b)";

/// Name, description and rules of every rule-table language.
const TABLES: &[(&str, &str, &[RuleDef])] = &[
    (javascript::NAME, javascript::DESCRIPTION, javascript::RULES),
    (python::NAME, python::DESCRIPTION, python::RULES),
    (css::NAME, css::DESCRIPTION, css::RULES),
    (json::NAME, json::DESCRIPTION, json::RULES),
    (bash::NAME, bash::DESCRIPTION, bash::RULES),
    (sql::NAME, sql::DESCRIPTION, sql::RULES),
    (java::NAME, java::DESCRIPTION, java::RULES),
    (yaml::NAME, yaml::DESCRIPTION, yaml::RULES),
];

/// Built-in aliases, applied after lower-casing: `(alias, language)`.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("javascript", "js"),
    ("python", "py"),
    ("shell", "bash"),
    ("xml", "html"),
    ("yml", "yaml"),
];

/// Compile every built-in language.
pub fn builtin() -> Result<Vec<Box<dyn Syntax>>, HighlightError> {
    let mut syntaxes: Vec<Box<dyn Syntax>> = Vec::with_capacity(TABLES.len() + 1);
    for (name, description, rules) in TABLES {
        syntaxes.push(Box::new(Grammar::compile(name, description, rules)?));
    }
    syntaxes.push(Box::new(MarkupSyntax::new()?));
    Ok(syntaxes)
}

/// Compile a single built-in rule-table language by name.
pub fn builtin_grammar(name: &str) -> Option<Result<Grammar, HighlightError>> {
    TABLES
        .iter()
        .find(|(table_name, _, _)| *table_name == name)
        .map(|(name, description, rules)| Grammar::compile(name, description, rules))
}
