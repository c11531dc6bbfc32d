//! Rendering token trees
//!
//! Rendering walks claimed and unclaimed ranges once, in source order. Every range of the
//! source is escaped exactly once, either as plain text between tokens or as the text of
//! an innermost token.

use crate::escape::{escape_html, escape_into};
use crate::token::{Token, TokenKind};
use std::ops::Range;

/// Knobs for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class put in front of the kind class, `token` by default. Empty for none.
    pub class_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            class_prefix: "token".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_class_prefix(prefix: impl Into<String>) -> Self {
        RenderOptions {
            class_prefix: prefix.into(),
        }
    }

    fn open_span(&self, kind: TokenKind) -> String {
        if self.class_prefix.is_empty() {
            format!("<span class=\"{}\">", kind.class_name())
        } else {
            format!(
                "<span class=\"{} {}\">",
                escape_html(&self.class_prefix),
                kind.class_name()
            )
        }
    }
}

/// Render `tokens` over `source` as escaped HTML with `<span>` wrappers.
pub fn render_html(source: &str, tokens: &[Token], options: &RenderOptions) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    render_range(&mut out, source, 0..source.len(), tokens, options);
    out
}

fn render_range(
    out: &mut String,
    source: &str,
    range: Range<usize>,
    tokens: &[Token],
    options: &RenderOptions,
) {
    let mut cursor = range.start;
    for token in tokens {
        escape_into(out, &source[cursor..token.span.start]);
        out.push_str(&options.open_span(token.kind));
        if token.children.is_empty() {
            escape_into(out, token.text(source));
        } else {
            render_range(out, source, token.span.clone(), &token.children, options);
        }
        out.push_str("</span>");
        cursor = token.span.end;
    }
    escape_into(out, &source[cursor..range.end]);
}

/// A leaf piece of the source: unclassified text has no kind, text between the children of
/// a token takes the token's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: Option<TokenKind>,
    pub text: &'a str,
}

/// Flatten a token tree into leaf segments. Concatenating the texts gives back `source`.
pub fn segments<'a>(source: &'a str, tokens: &[Token]) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    collect_segments(&mut out, source, 0..source.len(), tokens, None);
    out
}

fn collect_segments<'a>(
    out: &mut Vec<Segment<'a>>,
    source: &'a str,
    range: Range<usize>,
    tokens: &[Token],
    parent: Option<TokenKind>,
) {
    let push = |out: &mut Vec<Segment<'a>>, span: Range<usize>, kind| {
        if !span.is_empty() {
            out.push(Segment {
                kind,
                text: &source[span],
            });
        }
    };

    let mut cursor = range.start;
    for token in tokens {
        push(out, cursor..token.span.start, parent);
        if token.children.is_empty() {
            push(out, token.span.clone(), Some(token.kind));
        } else {
            collect_segments(
                out,
                source,
                token.span.clone(),
                &token.children,
                Some(token.kind),
            );
        }
        cursor = token.span.end;
    }
    push(out, cursor..range.end, parent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_flat() {
        let source = "if a<b";
        let tokens = vec![
            Token::new(TokenKind::Keyword, 0..2),
            Token::new(TokenKind::Operator, 4..5),
        ];
        let html = render_html(source, &tokens, &RenderOptions::default());
        assert_eq!(
            html,
            "<span class=\"token keyword\">if</span> a<span class=\"token operator\">&lt;</span>b"
        );
    }

    #[test]
    fn test_render_nested() {
        let source = "<i x>";
        let tokens = vec![Token::with_children(
            TokenKind::Tag,
            0..5,
            vec![
                Token::new(TokenKind::Tag, 0..2),
                Token::new(TokenKind::Tag, 4..5),
            ],
        )];
        let html = render_html(source, &tokens, &RenderOptions::with_class_prefix(""));
        assert_eq!(
            html,
            "<span class=\"tag\"><span class=\"tag\">&lt;i</span> x<span class=\"tag\">&gt;</span></span>"
        );
    }

    #[test]
    fn test_render_without_tokens_is_escaped_source() {
        let html = render_html("a & b", &[], &RenderOptions::default());
        assert_eq!(html, "a &amp; b");
    }

    #[test]
    fn test_class_prefix_is_escaped() {
        let tokens = vec![Token::new(TokenKind::Number, 0..1)];
        let html = render_html("1", &tokens, &RenderOptions::with_class_prefix("hl\"x"));
        assert_eq!(html, "<span class=\"hl&quot;x number\">1</span>");
    }

    #[test]
    fn test_segments_cover_source() {
        let source = "<i x>y";
        let tokens = vec![Token::with_children(
            TokenKind::Tag,
            0..5,
            vec![Token::new(TokenKind::Tag, 0..2)],
        )];
        let segs = segments(source, &tokens);
        assert_eq!(
            segs,
            vec![
                Segment {
                    kind: Some(TokenKind::Tag),
                    text: "<i"
                },
                Segment {
                    kind: Some(TokenKind::Tag),
                    text: " x>"
                },
                Segment {
                    kind: None,
                    text: "y"
                },
            ]
        );
        let joined: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(joined, source);
    }
}
