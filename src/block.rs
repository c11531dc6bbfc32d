//! Code block decoration
//!
//! A code-highlighter block is authored as a single cell whose classes carry the language
//! (`code-highlighter js`). Decorating it produces
//! `<pre class="language-js"><code class="language-js">…</code></pre>`.

use crate::escape::escape_html;
use crate::registry::LanguageRegistry;
use crate::render::RenderOptions;

/// Class of the block itself, never taken as the language.
pub const BLOCK_CLASS: &str = "code-highlighter";

/// Language used when the block carries no other class.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: String,
    code: String,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        CodeBlock {
            language: language.into(),
            code: code.into(),
        }
    }

    /// Build from the block's class list and text content. The text is trimmed.
    pub fn from_classes<I, S>(classes: I, text: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let language = classes
            .into_iter()
            .map(|class| class.as_ref().trim().to_string())
            .find(|class| !class.is_empty() && class != BLOCK_CLASS)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        CodeBlock::new(language, text.trim())
    }

    /// The language as declared, before normalization.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn render(&self, registry: &LanguageRegistry, options: &RenderOptions) -> String {
        let body = registry.highlight(&self.code, &self.language).render(options);
        let class = format!("language-{}", escape_html(&self.language));
        format!(
            "<pre class=\"{class}\"><code class=\"{class}\">{body}</code></pre>",
            class = class,
            body = body
        )
    }
}
