use crate::rules::{RuleRegistry, FALLBACK_LOCALE};

/// Primary language subtag: everything before the first `-`.
///
/// - `fr-FR` -> `fr`
/// - `bs-Latn-BA` -> `bs`
pub fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Resolve a locale tag to the plural category that applies to it.
///
/// Lookup order: the exact tag, then its primary subtag, then `"en"`.
/// An empty locale is treated as `"en"`.
pub fn resolve_category<'a>(rules: &'a RuleRegistry, locale: &str) -> Option<&'a str> {
    let locale = if locale.is_empty() {
        FALLBACK_LOCALE
    } else {
        locale
    };
    rules
        .category_for(locale)
        .or_else(|| rules.category_for(primary_subtag(locale)))
        .or_else(|| rules.category_for(FALLBACK_LOCALE))
}

/// Form index for `count` in `locale`.
///
/// Every [`RuleRegistry`] binds `"en"`, so this only returns `None` if a
/// bound category has lost its selector, which construction prevents.
pub fn plural_index(rules: &RuleRegistry, locale: &str, count: f64) -> Option<usize> {
    let category = resolve_category(rules, locale)?;
    rules.selector(category).map(|select| select(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_tag_wins() {
        let rules = RuleRegistry::default_rules();
        assert_eq!(resolve_category(&rules, "pt-br"), Some("french"));
        assert_eq!(resolve_category(&rules, "pt"), Some("german"));
        assert_eq!(resolve_category(&rules, "hu-HU"), Some("german"));
    }

    #[test]
    fn region_falls_back_to_language() {
        let rules = RuleRegistry::default_rules();
        assert_eq!(resolve_category(&rules, "fr-FR"), Some("french"));
        assert_eq!(resolve_category(&rules, "ru-UA"), Some("russian"));
        assert_eq!(resolve_category(&rules, "zh-Hant-TW"), Some("chinese"));
    }

    #[test]
    fn unknown_and_empty_fall_back_to_english() {
        let rules = RuleRegistry::default_rules();
        assert_eq!(resolve_category(&rules, "oz"), Some("german"));
        assert_eq!(resolve_category(&rules, "x-unknown"), Some("german"));
        assert_eq!(resolve_category(&rules, ""), Some("german"));
    }

    #[test]
    fn tags_are_case_sensitive() {
        let rules = RuleRegistry::default_rules();
        // `pt-BR` is not bound; it resolves through `pt`.
        assert_eq!(resolve_category(&rules, "pt-BR"), Some("german"));
        assert_eq!(resolve_category(&rules, "FR"), Some("german"));
    }

    #[test]
    fn primary_subtag_splits_on_first_dash() {
        assert_eq!(primary_subtag("bs-Latn-BA"), "bs");
        assert_eq!(primary_subtag("en"), "en");
        assert_eq!(primary_subtag("-x"), "");
    }

    #[test]
    fn plural_index_uses_resolved_rule() {
        let rules = RuleRegistry::default_rules();
        assert_eq!(plural_index(&rules, "fr-CA", 0.0), Some(0));
        assert_eq!(plural_index(&rules, "en-GB", 0.0), Some(1));
        assert_eq!(plural_index(&rules, "ar", 102.0), Some(5));
    }
}
