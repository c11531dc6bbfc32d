//! Claim-and-mask tokenizer
//!
//! Rules run in order. Each rule only scans the gaps left unclaimed by the rules before it,
//! and every match claims one or more byte ranges of the source. Claimed ranges are never
//! scanned again, so a string inside a comment stays part of the comment and a keyword inside
//! a string stays part of the string.
//!
//! Matches never cross a gap boundary: the search is bounded to the gap, but `^`, `$`, `\b`
//! and friends are evaluated against the whole source, so they see the real text on both
//! sides of the gap.

use crate::token::{Token, TokenKind};
use log::trace;
use regex_automata::meta::{BuildError, Regex};
use regex_automata::Input;
use std::ops::Range;

/// A compiled pattern plus the capture groups it claims.
///
/// Group 0 is the whole match. Focusing on another group is how a rule consumes context
/// (a trailing `(` for function names, a leading newline for CSS selectors) without
/// claiming it.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    captures: Vec<(usize, TokenKind)>,
}

impl Rule {
    /// Claim the whole match as `kind`.
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Rule, BuildError> {
        Rule::with_captures(pattern, vec![(0, kind)])
    }

    /// Claim only capture group `group` as `kind`.
    pub fn focused(pattern: &str, kind: TokenKind, group: usize) -> Result<Rule, BuildError> {
        Rule::with_captures(pattern, vec![(group, kind)])
    }

    /// Claim several capture groups, each with its own kind.
    pub fn with_captures(
        pattern: &str,
        captures: Vec<(usize, TokenKind)>,
    ) -> Result<Rule, BuildError> {
        Ok(Rule {
            pattern: pattern.to_string(),
            regex: Regex::new(pattern)?,
            captures,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of groups in the pattern, group 0 included.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len()
    }

    /// Scan one unclaimed gap and push the claims found into `found`.
    fn scan(&self, source: &str, gap: Range<usize>, found: &mut Vec<Token>) {
        let mut caps = self.regex.create_captures();
        let mut at = gap.start;

        while at < gap.end {
            let input = Input::new(source).range(at..gap.end);
            self.regex.search_captures(&input, &mut caps);
            let Some(whole) = caps.get_match() else {
                break;
            };

            let mut claimed: Vec<(Range<usize>, TokenKind)> = self
                .captures
                .iter()
                .filter_map(|&(group, kind)| {
                    caps.get_group(group).map(|span| (span.range(), kind))
                })
                .filter(|(span, _)| !span.is_empty())
                .collect();
            claimed.sort_by_key(|(span, _)| span.start);

            // Groups of one match may nest; only the outermost-first, non-overlapping ones count.
            let mut last_end = gap.start;
            for (span, kind) in claimed {
                if span.start >= last_end {
                    last_end = span.end;
                    found.push(Token::new(kind, span));
                }
            }

            at = if whole.is_empty() {
                next_char_boundary(source, whole.end())
            } else {
                whole.end()
            };
        }
    }
}

/// Tokenize the whole of `code` with `rules`.
pub fn tokenize(code: &str, rules: &[Rule]) -> Vec<Token> {
    let mut tokens = Vec::new();
    claim(code, 0..code.len(), rules, &mut tokens);
    tokens
}

/// Run `rules` over `range` of `source`, adding to `claims`.
///
/// `claims` must be sorted, disjoint and inside `range`; it stays that way.
pub fn claim(source: &str, range: Range<usize>, rules: &[Rule], claims: &mut Vec<Token>) {
    for (pass, rule) in rules.iter().enumerate() {
        let mut found = Vec::new();
        for gap in gaps(range.clone(), claims) {
            rule.scan(source, gap, &mut found);
        }
        trace!(
            "pass {} /{}/ claimed {} span(s)",
            pass,
            rule.pattern(),
            found.len()
        );
        if !found.is_empty() {
            claims.extend(found);
            claims.sort_by_key(|token| token.span.start);
        }
    }
}

/// The parts of `range` not covered by `claims`.
pub fn gaps(range: Range<usize>, claims: &[Token]) -> Vec<Range<usize>> {
    let mut gaps = Vec::new();
    let mut cursor = range.start;
    for token in claims {
        if token.span.start > cursor {
            gaps.push(cursor..token.span.start);
        }
        cursor = cursor.max(token.span.end);
    }
    if cursor < range.end {
        gaps.push(cursor..range.end);
    }
    gaps
}

fn next_char_boundary(source: &str, at: usize) -> usize {
    source[at..]
        .chars()
        .next()
        .map_or(source.len(), |c| at + c.len_utf8())
}
