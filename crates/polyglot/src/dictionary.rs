use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::rules::RuleRegistry;
use crate::substitution::Substitutions;
use crate::token::{Interpolation, TokenSyntax};
use crate::transform::transform_phrase;
use crate::PolyglotError;

/// Called when `t` finds no phrase: `(key, substitutions, locale, syntax, rules)`.
pub type MissingKeyHandler = Arc<
    dyn Fn(&str, &Substitutions, &str, &TokenSyntax, &RuleRegistry) -> String + Send + Sync,
>;

/// Receives the missing-translation message when no handler applies.
pub type WarnHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Construction options for [`Polyglot`].
#[derive(Clone, Default)]
pub struct PolyglotOptions {
    phrases: Option<Value>,
    locale: Option<String>,
    allow_missing: bool,
    on_missing_key: Option<MissingKeyHandler>,
    interpolation: Interpolation,
    plural_rules: Option<Arc<RuleRegistry>>,
    warn: Option<WarnHandler>,
}

impl PolyglotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial phrases; nested objects are flattened with `.`.
    pub fn phrases(mut self, phrases: Value) -> Self {
        self.phrases = Some(phrases);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Transform the key itself when no phrase exists for it.
    ///
    /// Ignored when [`on_missing_key`](Self::on_missing_key) is set.
    pub fn allow_missing(mut self, allow: bool) -> Self {
        self.allow_missing = allow;
        self
    }

    pub fn on_missing_key<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &Substitutions, &str, &TokenSyntax, &RuleRegistry) -> String
            + Send
            + Sync
            + 'static,
    {
        self.on_missing_key = Some(Arc::new(handler));
        self
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Replace the built-in plural rules entirely.
    pub fn plural_rules(mut self, rules: Arc<RuleRegistry>) -> Self {
        self.plural_rules = Some(rules);
        self
    }

    pub fn warn<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.warn = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for PolyglotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyglotOptions")
            .field("locale", &self.locale)
            .field("allow_missing", &self.allow_missing)
            .field("on_missing_key", &self.on_missing_key.is_some())
            .field("interpolation", &self.interpolation)
            .finish_non_exhaustive()
    }
}

/// Phrase dictionary bound to a locale, token syntax and plural rules.
///
/// # Example
///
/// ```
/// use polyglot::{subs, Polyglot, PolyglotOptions};
/// use serde_json::json;
///
/// let polyglot = Polyglot::new(
///     PolyglotOptions::new().phrases(json!({
///         "nav": { "hi_user": "Hi, %{user}." },
///         "cars": "%{smart_count} car |||| %{smart_count} cars",
///     })),
/// )
/// .unwrap();
///
/// assert_eq!(polyglot.t_with("nav.hi_user", subs! { user: "Raph" }), "Hi, Raph.");
/// assert_eq!(polyglot.t_with("cars", 2), "2 cars");
/// ```
#[derive(Clone)]
pub struct Polyglot {
    phrases: HashMap<String, String>,
    locale: String,
    on_missing_key: Option<MissingKeyHandler>,
    warn: Option<WarnHandler>,
    syntax: TokenSyntax,
    rules: Arc<RuleRegistry>,
}

impl Polyglot {
    /// Fails when the interpolation syntax collides with `||||`.
    pub fn new(options: PolyglotOptions) -> Result<Self, PolyglotError> {
        let syntax = TokenSyntax::new(&options.interpolation)?;

        let on_missing_key = options.on_missing_key.or_else(|| {
            options.allow_missing.then(|| {
                Arc::new(
                    |key: &str,
                     subs: &Substitutions,
                     locale: &str,
                     syntax: &TokenSyntax,
                     rules: &RuleRegistry| {
                        transform_phrase(key, Some(subs), locale, Some(syntax), Some(rules))
                    },
                ) as MissingKeyHandler
            })
        });

        let mut polyglot = Self {
            phrases: HashMap::new(),
            locale: options
                .locale
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "en".to_string()),
            on_missing_key,
            warn: options.warn,
            syntax,
            rules: options
                .plural_rules
                .unwrap_or_else(RuleRegistry::default_rules),
        };
        if let Some(phrases) = &options.phrases {
            polyglot.extend(phrases);
        }
        Ok(polyglot)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch locale. Only plural selection depends on it; empty input is ignored.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if locale.is_empty() || locale == self.locale {
            return;
        }
        debug!("Polyglot::set_locale: {} -> {}", self.locale, locale);
        self.locale = locale;
    }

    /// Add phrases, overriding existing keys.
    pub fn extend(&mut self, phrases: &Value) {
        self.extend_with_prefix(phrases, None);
    }

    /// Add phrases under `prefix.`.
    pub fn extend_with_prefix(&mut self, phrases: &Value, prefix: Option<&str>) {
        for (key, value) in children(phrases, prefix) {
            match value {
                Value::String(s) => {
                    self.phrases.insert(key, s.clone());
                }
                Value::Object(_) | Value::Array(_) => {
                    self.extend_with_prefix(value, Some(key.as_str()))
                }
                other => debug!(key = %key, value = %other, "skipping non-string phrase"),
            }
        }
    }

    /// Remove a single key.
    pub fn unset(&mut self, key: &str) {
        self.phrases.remove(key);
    }

    /// Remove every key the nested tree would have added.
    pub fn unset_tree(&mut self, phrases: &Value) {
        self.unset_tree_with_prefix(phrases, None);
    }

    pub fn unset_tree_with_prefix(&mut self, phrases: &Value, prefix: Option<&str>) {
        for (key, value) in children(phrases, prefix) {
            match value {
                Value::Object(_) | Value::Array(_) => {
                    self.unset_tree_with_prefix(value, Some(key.as_str()))
                }
                _ => {
                    self.phrases.remove(&key);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.phrases.clear();
    }

    /// Drop all phrases and load `phrases` instead.
    pub fn replace(&mut self, phrases: &Value) {
        self.clear();
        self.extend(phrases);
    }

    pub fn has(&self, key: &str) -> bool {
        self.phrases.contains_key(key)
    }

    /// Flattened phrases.
    pub fn phrases(&self) -> &HashMap<String, String> {
        &self.phrases
    }

    pub fn token_syntax(&self) -> &TokenSyntax {
        &self.syntax
    }

    pub fn plural_rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Translate without substitutions.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &Substitutions::new())
    }

    /// Translate `key`, pluralizing and interpolating with `substitutions`.
    ///
    /// A missing key falls back to the `_` substitution, then the missing-key
    /// handler, and finally to the key itself after a warning.
    pub fn t_with(&self, key: &str, substitutions: impl Into<Substitutions>) -> String {
        self.translate(key, &substitutions.into())
    }

    /// Transform an arbitrary phrase with this instance's locale and syntax.
    pub fn transform(&self, phrase: &str, substitutions: Option<&Substitutions>) -> String {
        transform_phrase(
            phrase,
            substitutions,
            &self.locale,
            Some(&self.syntax),
            Some(self.rules.as_ref()),
        )
    }

    fn translate(&self, key: &str, subs: &Substitutions) -> String {
        let phrase = self
            .phrases
            .get(key)
            .map(String::as_str)
            .or_else(|| subs.default_phrase());

        if let Some(phrase) = phrase {
            return self.transform(phrase, Some(subs));
        }

        if let Some(handler) = &self.on_missing_key {
            return handler(key, subs, &self.locale, &self.syntax, self.rules.as_ref());
        }

        match &self.warn {
            Some(w) => w(&format!("Missing translation for key: \"{key}\"")),
            None => warn!(key = %key, "Missing translation for key"),
        }
        key.to_string()
    }
}

impl Default for Polyglot {
    fn default() -> Self {
        Self {
            phrases: HashMap::new(),
            locale: "en".to_string(),
            on_missing_key: None,
            warn: None,
            syntax: TokenSyntax::default(),
            rules: RuleRegistry::default_rules(),
        }
    }
}

impl fmt::Debug for Polyglot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polyglot")
            .field("locale", &self.locale)
            .field("phrases", &self.phrases.len())
            .field("syntax", &(self.syntax.prefix(), self.syntax.suffix()))
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

// Immediate children of an object or array, keyed with the dotted prefix.
fn children<'v>(tree: &'v Value, prefix: Option<&str>) -> Vec<(String, &'v Value)> {
    let full_key = |key: &str| match prefix {
        Some(p) if !p.is_empty() => format!("{p}.{key}"),
        _ => key.to_string(),
    };
    match tree {
        Value::Object(map) => map.iter().map(|(k, v)| (full_key(k.as_str()), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (full_key(&i.to_string()), v))
            .collect(),
        _ => Vec::new(),
    }
}
