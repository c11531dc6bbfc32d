//! Language registry for syntax discovery and selection
//!
//! Maps normalized language names to [`Syntax`] implementations. Identifiers are normalized
//! by trimming, lower-casing and then following the alias table, so `" JavaScript "`,
//! `"javascript"` and `"js"` all select the same grammar.
//!
//! The default registry is built once per process and never mutated; see [`registry`].

use crate::error::HighlightError;
use crate::grammars::{self, BUILTIN_ALIASES};
use crate::highlight::Highlighted;
use crate::syntax::Syntax;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_REGISTRY: Lazy<LanguageRegistry> = Lazy::new(|| {
    LanguageRegistry::try_with_defaults().expect("built-in grammars must compile")
});

/// The process-wide registry with every built-in language.
pub fn registry() -> &'static LanguageRegistry {
    &DEFAULT_REGISTRY
}

/// Registry of highlightable languages
///
/// # Examples
///
/// ```ignore
/// let mut registry = LanguageRegistry::try_with_defaults()?;
/// registry.register(my_grammar);
/// registry.add_alias("mine", "my-grammar");
///
/// let html = registry.highlight("source text", "Mine").to_html();
/// ```
pub struct LanguageRegistry {
    syntaxes: HashMap<String, Box<dyn Syntax>>,
    aliases: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LanguageRegistry {
            syntaxes: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create a registry with the built-in languages and aliases
    pub fn try_with_defaults() -> Result<Self, HighlightError> {
        let mut registry = Self::new();
        for syntax in grammars::builtin()? {
            registry.register_boxed(syntax);
        }
        for (alias, target) in BUILTIN_ALIASES {
            registry.add_alias(alias, target);
        }
        Ok(registry)
    }

    /// Register a syntax under its name
    ///
    /// If a syntax with the same name already exists, it will be replaced.
    pub fn register<S: Syntax + 'static>(&mut self, syntax: S) {
        self.register_boxed(Box::new(syntax));
    }

    pub fn register_boxed(&mut self, syntax: Box<dyn Syntax>) {
        let name = syntax.name().trim().to_lowercase();
        self.syntaxes.insert(name, syntax);
    }

    /// Make `alias` select `target`. Both are lower-cased, and a target that is itself an
    /// alias is resolved first, so lookups always take a single hop.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        let target = self.normalize(target);
        self.aliases.insert(alias.trim().to_lowercase(), target);
    }

    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        self.add_alias(alias, target);
        self
    }

    /// Trim, lower-case and resolve aliases. Unknown names come back lower-cased.
    pub fn normalize(&self, language: &str) -> String {
        let key = language.trim().to_lowercase();
        match self.aliases.get(&key) {
            Some(target) => target.clone(),
            None => key,
        }
    }

    /// Get a syntax by language identifier
    pub fn get(&self, language: &str) -> Result<&dyn Syntax, HighlightError> {
        self.resolve(language)
            .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()))
    }

    /// Like [`get`](Self::get), `None` for unknown languages
    pub fn resolve(&self, language: &str) -> Option<&dyn Syntax> {
        self.syntaxes
            .get(&self.normalize(language))
            .map(|syntax| syntax.as_ref())
    }

    /// Check if a language (or alias) is known
    pub fn has(&self, language: &str) -> bool {
        self.resolve(language).is_some()
    }

    /// List all language names (sorted)
    pub fn list_languages(&self) -> Vec<String> {
        let mut names: Vec<_> = self.syntaxes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Aliases that select `language` (sorted)
    pub fn aliases_for(&self, language: &str) -> Vec<String> {
        let target = self.normalize(language);
        let mut aliases: Vec<_> = self
            .aliases
            .iter()
            .filter(|(_, to)| **to == target)
            .map(|(alias, _)| alias.clone())
            .collect();
        aliases.sort();
        aliases
    }

    /// Tokenize `code` as `language`. Unknown languages fall back to plain text.
    pub fn highlight<'a>(&self, code: &'a str, language: &str) -> Highlighted<'a> {
        match self.resolve(language) {
            Some(syntax) => {
                debug!("highlighting {} byte(s) as {}", code.len(), syntax.name());
                Highlighted::new(code, syntax.name(), syntax.tokenize(code))
            }
            None => {
                debug!("no syntax for '{}', rendering plain text", language);
                Highlighted::plain(code)
            }
        }
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
