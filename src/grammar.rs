//! Rule-table grammars
//!
//! Built-in languages are declared as `const` tables of [`RuleDef`]s, tried in declaration
//! order, and compiled into a [`Grammar`] when the registry is first used. User grammars
//! from configuration go through [`Grammar::add_pattern`], which validates the pattern and
//! the capture group.

use crate::error::HighlightError;
use crate::syntax::Syntax;
use crate::token::{Token, TokenKind};
use crate::tokenizer::{self, Rule};

/// Static description of one rule: pattern, kind, and the group to claim (0 = whole match).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDef {
    pub pattern: &'static str,
    pub kind: TokenKind,
    pub group: usize,
}

impl RuleDef {
    pub const fn new(pattern: &'static str, kind: TokenKind) -> Self {
        RuleDef {
            pattern,
            kind,
            group: 0,
        }
    }

    pub const fn focused(pattern: &'static str, kind: TokenKind, group: usize) -> Self {
        RuleDef {
            pattern,
            kind,
            group,
        }
    }
}

/// An ordered rule set for one language.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    description: String,
    rules: Vec<Rule>,
}

impl Grammar {
    /// An empty grammar. Until rules are added it claims nothing.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Grammar {
            name: name.into(),
            description: description.into(),
            rules: Vec::new(),
        }
    }

    /// Compile a static rule table.
    pub fn compile(
        name: &str,
        description: &str,
        defs: &[RuleDef],
    ) -> Result<Grammar, HighlightError> {
        let mut grammar = Grammar::new(name, description);
        for def in defs {
            grammar.add_pattern(def.pattern, def.kind, def.group)?;
        }
        Ok(grammar)
    }

    /// Append a rule. Fails if the pattern does not compile or has no group `group`.
    pub fn add_pattern(
        &mut self,
        pattern: &str,
        kind: TokenKind,
        group: usize,
    ) -> Result<(), HighlightError> {
        let rule = Rule::focused(pattern, kind, group).map_err(|e| self.invalid(pattern, e))?;
        if group >= rule.group_count() {
            return Err(self.invalid(
                pattern,
                format!(
                    "capture group {} does not exist (pattern has {})",
                    group,
                    rule.group_count() - 1
                ),
            ));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn invalid(&self, pattern: &str, message: impl ToString) -> HighlightError {
        HighlightError::InvalidPattern {
            language: self.name.clone(),
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }
}

impl Syntax for Grammar {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tokenize(&self, code: &str) -> Vec<Token> {
        tokenizer::tokenize(code, &self.rules)
    }
}
