//! Plural rule registry: category selectors plus the locale → category index.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::plural::PluralType;
use crate::PolyglotError;

/// Maps a count to a zero-based form index.
pub type PluralSelector = Arc<dyn Fn(f64) -> usize + Send + Sync>;

/// Locale that must resolve to a category; it terminates every lookup.
pub const FALLBACK_LOCALE: &str = "en";

static DEFAULT_RULES: OnceLock<Arc<RuleRegistry>> = OnceLock::new();

/// Immutable set of plural categories and the locales bound to each.
#[derive(Clone)]
pub struct RuleRegistry {
    selectors: HashMap<String, PluralSelector>,
    locale_to_category: HashMap<String, String>,
}

impl RuleRegistry {
    /// Build a registry from named selectors and per-category locale lists.
    ///
    /// Fails when a binding names a category with no selector, or when
    /// nothing is bound to `"en"`.
    pub fn new<C, B, N, L, S>(categories: C, bindings: B) -> Result<Self, PolyglotError>
    where
        C: IntoIterator<Item = (N, PluralSelector)>,
        B: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selectors: HashMap<String, PluralSelector> = categories
            .into_iter()
            .map(|(name, f)| (name.into(), f))
            .collect();

        let mut locale_to_category = HashMap::new();
        for (name, locales) in bindings {
            let name = name.into();
            if !selectors.contains_key(&name) {
                return Err(PolyglotError::InvalidConfiguration(format!(
                    "locales bound to undefined plural category `{name}`"
                )));
            }
            for locale in locales {
                locale_to_category.insert(locale.into(), name.clone());
            }
        }

        if !locale_to_category.contains_key(FALLBACK_LOCALE) {
            return Err(PolyglotError::InvalidConfiguration(format!(
                "plural rules must bind the `{FALLBACK_LOCALE}` locale"
            )));
        }

        Ok(Self {
            selectors,
            locale_to_category,
        })
    }

    /// The built-in rule table, shared by every caller that supplies none.
    pub fn default_rules() -> Arc<RuleRegistry> {
        DEFAULT_RULES
            .get_or_init(|| Arc::new(Self::builtin()))
            .clone()
    }

    fn builtin() -> Self {
        let mut selectors: HashMap<String, PluralSelector> = HashMap::new();
        let mut locale_to_category = HashMap::new();
        for ty in PluralType::ALL {
            selectors.insert(ty.name().to_string(), Arc::new(move |n: f64| ty.select(n)));
            for locale in ty.locales() {
                locale_to_category.insert((*locale).to_string(), ty.name().to_string());
            }
        }
        Self {
            selectors,
            locale_to_category,
        }
    }

    /// Category bound to exactly this locale tag.
    pub fn category_for(&self, locale: &str) -> Option<&str> {
        self.locale_to_category.get(locale).map(String::as_str)
    }

    pub fn selector(&self, category: &str) -> Option<&PluralSelector> {
        self.selectors.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.selectors.keys().map(String::as_str)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut categories: Vec<&str> = self.categories().collect();
        categories.sort_unstable();
        f.debug_struct("RuleRegistry")
            .field("categories", &categories)
            .field("locales", &self.locale_to_category.len())
            .finish()
    }
}
