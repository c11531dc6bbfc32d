//! The result of highlighting one snippet

use crate::render::{self, RenderOptions, Segment};
use crate::token::{Token, TokenView};

/// A snippet together with its token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    source: &'a str,
    language: Option<String>,
    tokens: Vec<Token>,
}

impl<'a> Highlighted<'a> {
    pub fn new(source: &'a str, language: impl Into<String>, tokens: Vec<Token>) -> Self {
        Highlighted {
            source,
            language: Some(language.into()),
            tokens,
        }
    }

    /// Unrecognized language: no tokens, rendered as escaped text.
    pub fn plain(source: &'a str) -> Self {
        Highlighted {
            source,
            language: None,
            tokens: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The normalized language name, `None` for plain text.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_plain(&self) -> bool {
        self.language.is_none()
    }

    pub fn to_html(&self) -> String {
        self.render(&RenderOptions::default())
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        render::render_html(self.source, &self.tokens, options)
    }

    pub fn segments(&self) -> Vec<Segment<'a>> {
        render::segments(self.source, &self.tokens)
    }

    pub fn token_views(&self) -> Vec<TokenView<'a>> {
        self.tokens
            .iter()
            .map(|token| TokenView::new(token, self.source))
            .collect()
    }
}
