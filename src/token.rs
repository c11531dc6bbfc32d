//! Token kinds and the token tree produced by the tokenizers
//!
//! A token is a claimed byte range of the source. Its text is never copied: callers slice
//! the source with [`Token::text`]. Only HTML tags carry children (tag name, attributes and
//! the closing bracket are claimed inside the tag's own range).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Category of a highlighted span. Drives the CSS class of the rendered `<span>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Number,
    Function,
    Operator,
    Punctuation,
    /// Python decorators and Java annotations
    Decorator,
    Variable,
    Property,
    Selector,
    Color,
    Boolean,
    /// CSS `!important`
    Important,
    Tag,
    AttrName,
    AttrValue,
    Doctype,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Number,
        TokenKind::Function,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Decorator,
        TokenKind::Variable,
        TokenKind::Property,
        TokenKind::Selector,
        TokenKind::Color,
        TokenKind::Boolean,
        TokenKind::Important,
        TokenKind::Tag,
        TokenKind::AttrName,
        TokenKind::AttrValue,
        TokenKind::Doctype,
    ];

    /// Stable class name used in rendered markup (and by stylesheets).
    pub fn class_name(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Function => "function",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Decorator => "decorator",
            TokenKind::Variable => "variable",
            TokenKind::Property => "property",
            TokenKind::Selector => "selector",
            TokenKind::Color => "color",
            TokenKind::Boolean => "boolean",
            TokenKind::Important => "important",
            TokenKind::Tag => "tag",
            TokenKind::AttrName => "attr-name",
            TokenKind::AttrValue => "attr-value",
            TokenKind::Doctype => "doctype",
        }
    }

    /// Inverse of [`TokenKind::class_name`].
    pub fn from_class_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.class_name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A classified range of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range into the source
    pub span: Range<usize>,
    /// Nested claims, all inside `span`, sorted and disjoint
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Token {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: TokenKind, span: Range<usize>, children: Vec<Token>) -> Self {
        Token {
            kind,
            span,
            children,
        }
    }

    /// The token's text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Serializable view of a token, with its text resolved against the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TokenView<'a>>,
}

impl<'a> TokenView<'a> {
    pub fn new(token: &Token, source: &'a str) -> Self {
        TokenView {
            kind: token.kind,
            text: token.text(source),
            start: token.span.start,
            end: token.span.end,
            children: token
                .children
                .iter()
                .map(|child| TokenView::new(child, source))
                .collect(),
        }
    }
}
