//! HTML highlighting
//!
//! Markup can't be a flat rule table: attribute-looking text outside a tag (`a=b` in a
//! paragraph) must stay plain. Four passes instead:
//!
//! 1. comments
//! 2. doctype
//! 3. whole tags
//! 4. inside each tag only: attribute name/value pairs, the tag name, the closing bracket
//!
//! Pass 4 runs the claim engine scoped to the tag's range and stores its claims as the tag
//! token's children. Attributes go first so that a `>` inside a quoted value is never taken
//! for the closing bracket.

use crate::error::HighlightError;
use crate::syntax::Syntax;
use crate::token::{Token, TokenKind};
use crate::tokenizer::{self, Rule};
use regex_automata::meta::BuildError;

const COMMENT: &str = r"<!--[\s\S]*?-->";
const DOCTYPE: &str = r"<!(?i-u:DOCTYPE)[^<>]*>";
const TAG: &str = r#"</?[a-zA-Z][a-zA-Z0-9-]*(?:\s+[a-zA-Z][a-zA-Z0-9-]*(?:=(?:"[^"]*"|'[^']*'|[^\s"'<>=`]+))?)*\s*/?>"#;

const ATTRIBUTE: &str = r#"\s+([a-zA-Z][a-zA-Z0-9-]*)=("[^"]*"|'[^']*'|[^\s"'<>=`]+)"#;
const TAG_NAME: &str = r"</?[a-zA-Z][a-zA-Z0-9-]*";
const TAG_CLOSE: &str = r"\s*/?>";

/// The `html` language.
#[derive(Debug, Clone)]
pub struct MarkupSyntax {
    document_rules: Vec<Rule>,
    tag_rules: Vec<Rule>,
}

impl MarkupSyntax {
    pub fn new() -> Result<Self, HighlightError> {
        let document_rules = vec![
            compile(Rule::new(COMMENT, TokenKind::Comment), COMMENT)?,
            compile(Rule::new(DOCTYPE, TokenKind::Doctype), DOCTYPE)?,
            compile(Rule::new(TAG, TokenKind::Tag), TAG)?,
        ];
        let tag_rules = vec![
            compile(
                Rule::with_captures(
                    ATTRIBUTE,
                    vec![(1, TokenKind::AttrName), (2, TokenKind::AttrValue)],
                ),
                ATTRIBUTE,
            )?,
            compile(Rule::new(TAG_NAME, TokenKind::Tag), TAG_NAME)?,
            compile(Rule::new(TAG_CLOSE, TokenKind::Tag), TAG_CLOSE)?,
        ];
        Ok(MarkupSyntax {
            document_rules,
            tag_rules,
        })
    }
}

fn compile(rule: Result<Rule, BuildError>, pattern: &str) -> Result<Rule, HighlightError> {
    rule.map_err(|e| HighlightError::InvalidPattern {
        language: "html".to_string(),
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

impl Syntax for MarkupSyntax {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML and XML markup"
    }

    fn tokenize(&self, code: &str) -> Vec<Token> {
        let mut tokens = tokenizer::tokenize(code, &self.document_rules);
        for token in tokens.iter_mut().filter(|t| t.kind == TokenKind::Tag) {
            tokenizer::claim(
                code,
                token.span.clone(),
                &self.tag_rules,
                &mut token.children,
            );
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(source: &str, tokens: &[Token]) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|t| (t.kind, t.text(source).to_string()))
            .collect()
    }

    #[test]
    fn test_comment_doctype_and_tags() {
        let syntax = MarkupSyntax::new().unwrap();
        let source = "<!DOCTYPE html><!-- c --><p>hi</p>";
        let tokens = syntax.tokenize(source);
        assert_eq!(
            flat(source, &tokens),
            vec![
                (TokenKind::Doctype, "<!DOCTYPE html>".to_string()),
                (TokenKind::Comment, "<!-- c -->".to_string()),
                (TokenKind::Tag, "<p>".to_string()),
                (TokenKind::Tag, "</p>".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_children() {
        let syntax = MarkupSyntax::new().unwrap();
        let source = r#"<a href="x>y" hidden data-id=7 />"#;
        let tokens = syntax.tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            flat(source, &tokens[0].children),
            vec![
                (TokenKind::Tag, "<a".to_string()),
                (TokenKind::AttrName, "href".to_string()),
                (TokenKind::AttrValue, "\"x>y\"".to_string()),
                (TokenKind::AttrName, "data-id".to_string()),
                (TokenKind::AttrValue, "7".to_string()),
                (TokenKind::Tag, " />".to_string()),
            ]
        );
    }

    #[test]
    fn test_attribute_text_outside_tags_is_plain() {
        let syntax = MarkupSyntax::new().unwrap();
        let tokens = syntax.tokenize("x=1 and y='2'");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tags_inside_comments_stay_comment() {
        let syntax = MarkupSyntax::new().unwrap();
        let source = "<!-- <b>bold</b> -->";
        let tokens = syntax.tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert!(tokens[0].children.is_empty());
    }

    #[test]
    fn test_doctype_is_case_insensitive() {
        let syntax = MarkupSyntax::new().unwrap();
        let tokens = syntax.tokenize("<!doctype html>");
        assert_eq!(tokens[0].kind, TokenKind::Doctype);
    }
}
