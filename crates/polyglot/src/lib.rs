//! Phrase lookup with locale-aware pluralization and interpolation.
//!
//! - Plural rules: a fixed table of categories ([`PluralType`]) bound to locale tags,
//!   replaceable per instance with a custom [`RuleRegistry`]
//! - Phrases: `||||` separates plural variants, `%{name}` marks a placeholder
//! - [`Polyglot`]: a flat phrase dictionary built from nested JSON trees
//!
//! The transformer itself ([`transform_phrase`]) is a pure function and can be
//! used without a dictionary.

mod dictionary;
mod error;
mod locale;
mod plural;
mod rules;
mod substitution;
mod token;
mod transform;

pub use dictionary::{MissingKeyHandler, Polyglot, PolyglotOptions, WarnHandler};
pub use error::PolyglotError;
pub use locale::{plural_index, primary_subtag, resolve_category};
pub use plural::PluralType;
pub use rules::{PluralSelector, RuleRegistry, FALLBACK_LOCALE};
pub use substitution::{SubValue, Substitutions, DEFAULT_PHRASE, SMART_COUNT};
pub use token::{Interpolation, TokenSyntax, DEFAULT_PREFIX, DEFAULT_SUFFIX, PLURAL_DELIMITER};
pub use transform::{transform_phrase, transform_value};

/// Build named [`Substitutions`].
///
/// Examples:
/// - `subs! { name: "Spike" }`
/// - `subs! { smart_count: 3, place: city }`
///
/// The `_` default phrase is not an identifier; add it with
/// [`Substitutions::arg`].
#[macro_export]
macro_rules! subs {
    ($($name:ident : $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut s = $crate::Substitutions::new();
        $(
            s.insert(stringify!($name), $value);
        )*
        s
    }};
}
