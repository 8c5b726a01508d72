//! Placeholder delimiters.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::PolyglotError;

/// Separator between plural variants in a phrase. Never configurable.
pub const PLURAL_DELIMITER: &str = "||||";

pub const DEFAULT_PREFIX: &str = "%{";
pub const DEFAULT_SUFFIX: &str = "}";

/// Interpolation settings as they appear in host configuration.
///
/// Missing or empty values fall back to `%{` and `}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpolation {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl Interpolation {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            suffix: Some(suffix.into()),
        }
    }
}

/// A compiled `prefix` + name + `suffix` matcher.
///
/// Delimiters are matched literally. The name is the shortest run of
/// characters up to the next suffix, never crossing a line terminator.
#[derive(Clone, Debug)]
pub struct TokenSyntax {
    prefix: String,
    suffix: String,
    pattern: Regex,
}

impl TokenSyntax {
    pub fn new(interpolation: &Interpolation) -> Result<Self, PolyglotError> {
        let prefix = non_empty_or(interpolation.prefix.as_deref(), DEFAULT_PREFIX);
        let suffix = non_empty_or(interpolation.suffix.as_deref(), DEFAULT_SUFFIX);

        if prefix == PLURAL_DELIMITER || suffix == PLURAL_DELIMITER {
            return Err(PolyglotError::InvalidConfiguration(format!(
                "\"{PLURAL_DELIMITER}\" token is reserved for pluralization"
            )));
        }

        let pattern = compile(prefix, suffix).map_err(|e| {
            PolyglotError::InvalidConfiguration(format!("token pattern does not compile: {e}"))
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Replace every placeholder in one pass.
    ///
    /// `lookup` receives the placeholder name; returning `None` keeps the
    /// placeholder as written. Replacement text is inserted literally and is
    /// not scanned again.
    pub fn replace_all<'t, F>(&self, text: &'t str, mut lookup: F) -> Cow<'t, str>
    where
        F: FnMut(&str) -> Option<String>,
    {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
    }
}

static DEFAULT_SYNTAX: OnceLock<TokenSyntax> = OnceLock::new();

impl TokenSyntax {
    /// The `%{name}` syntax, compiled once per process.
    pub fn default_syntax() -> &'static TokenSyntax {
        DEFAULT_SYNTAX.get_or_init(|| TokenSyntax {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            pattern: compile(DEFAULT_PREFIX, DEFAULT_SUFFIX).expect("Invalid default token pattern"),
        })
    }
}

impl Default for TokenSyntax {
    fn default() -> Self {
        Self::default_syntax().clone()
    }
}

// Names stop at line terminators: `\n`, `\r`, U+2028 and U+2029.
const NAME_PATTERN: &str = r"([^\n\r\x{2028}\x{2029}]*?)";

fn compile(prefix: &str, suffix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "{}{NAME_PATTERN}{}",
        regex::escape(prefix),
        regex::escape(suffix)
    ))
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
