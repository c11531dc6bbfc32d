//! Shared configuration loader for the hilite toolchain.
//!
//! `defaults/hilite.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`HiliteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use hilite::{Grammar, HighlightError, LanguageRegistry, RenderOptions, TokenKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/hilite.default.toml");

/// Top-level configuration consumed by hilite applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HiliteConfig {
    pub render: RenderConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub languages: LanguagesConfig,
}

/// Output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub class_prefix: String,
    pub wrap_block: bool,
}

/// How snippets are read before highlighting.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub trim: bool,
    pub default_language: String,
}

/// Extra aliases and user grammars, both layered over the built-ins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagesConfig {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub custom: BTreeMap<String, CustomGrammarConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomGrammarConfig {
    #[serde(default)]
    pub description: String,
    pub rules: Vec<CustomRuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomRuleConfig {
    pub pattern: String,
    pub kind: TokenKind,
    #[serde(default)]
    pub group: usize,
}

impl HiliteConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_class_prefix(self.render.class_prefix.clone())
    }

    /// The built-in registry plus the configured grammars and aliases.
    pub fn registry(&self) -> Result<LanguageRegistry, HighlightError> {
        let mut registry = LanguageRegistry::try_with_defaults()?;
        for (name, custom) in &self.languages.custom {
            let mut grammar = Grammar::new(name, &custom.description);
            for rule in &custom.rules {
                grammar.add_pattern(&rule.pattern, rule.kind, rule.group)?;
            }
            registry.register(grammar);
        }
        // Aliases may point at each other in any order: keep adding the ones whose target
        // already resolves until no more can be added.
        let mut pending: Vec<(&String, &String)> = self.languages.aliases.iter().collect();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|(alias, target)| {
                if registry.has(target) {
                    registry.add_alias(alias, target);
                    false
                } else {
                    true
                }
            });
            if pending.len() == before {
                let (alias, target) = pending[0];
                return Err(HighlightError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(registry)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HiliteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HiliteConfig, ConfigError> {
    Loader::new().build()
}
