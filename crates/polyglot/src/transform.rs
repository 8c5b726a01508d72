//! Phrase transformation: plural variant selection, then interpolation.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Template is not a string | `InvalidArgument` (dynamic entry point only) |
//! | No substitutions | Template returned untouched |
//! | Placeholder with no value | Placeholder left as written |
//! | Plural index past the last variant | First variant |
//! | Unknown locale | Resolved through `"en"` |

use serde_json::Value;

use crate::locale::plural_index;
use crate::rules::RuleRegistry;
use crate::substitution::Substitutions;
use crate::token::{TokenSyntax, PLURAL_DELIMITER};
use crate::PolyglotError;

/// Pick the plural variant and fill in placeholders.
///
/// `syntax` and `rules` default to `%{name}` and the built-in rule table.
///
/// ```
/// use polyglot::{transform_phrase, Substitutions};
///
/// let phrase = "%{smart_count} new message |||| %{smart_count} new messages";
/// let one = Substitutions::from(1);
/// assert_eq!(transform_phrase(phrase, Some(&one), "en", None, None), "1 new message");
/// let five = Substitutions::from(5);
/// assert_eq!(transform_phrase(phrase, Some(&five), "en", None, None), "5 new messages");
/// ```
pub fn transform_phrase(
    phrase: &str,
    substitutions: Option<&Substitutions>,
    locale: &str,
    syntax: Option<&TokenSyntax>,
    rules: Option<&RuleRegistry>,
) -> String {
    let Some(subs) = substitutions else {
        return phrase.to_string();
    };

    let mut text = phrase;
    if let Some(count) = subs.smart_count() {
        if !text.is_empty() {
            text = select_variant(text, locale, count, rules);
        }
    }

    let syntax = syntax.unwrap_or_else(|| TokenSyntax::default_syntax());
    syntax
        .replace_all(text, |name| subs.get(name).and_then(|v| v.to_text()))
        .into_owned()
}

/// [`transform_phrase`] for dynamically typed input.
///
/// Anything but a JSON string is rejected before substitutions are looked at.
pub fn transform_value(
    phrase: &Value,
    substitutions: &Value,
    locale: &str,
    syntax: Option<&TokenSyntax>,
    rules: Option<&RuleRegistry>,
) -> Result<String, PolyglotError> {
    let Value::String(phrase) = phrase else {
        return Err(PolyglotError::InvalidArgument(format!(
            "phrase must be a string, got `{phrase}`"
        )));
    };
    let subs = Substitutions::from_json(substitutions)?;
    Ok(transform_phrase(phrase, subs.as_ref(), locale, syntax, rules))
}

fn select_variant<'a>(
    phrase: &'a str,
    locale: &str,
    count: f64,
    rules: Option<&RuleRegistry>,
) -> &'a str {
    let default_rules;
    let rules: &RuleRegistry = match rules {
        Some(r) => r,
        None => {
            default_rules = RuleRegistry::default_rules();
            &default_rules
        }
    };

    // An empty variant counts as missing, like an out-of-range index.
    let variants: Vec<&str> = phrase.split(PLURAL_DELIMITER).collect();
    let chosen = plural_index(rules, locale, count)
        .and_then(|idx| variants.get(idx))
        .filter(|v| !v.is_empty())
        .or_else(|| variants.first())
        .copied()
        .unwrap_or(phrase);
    chosen.trim()
}
