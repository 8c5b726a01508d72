use std::sync::Arc;

use polyglot::{Polyglot, PolyglotOptions, PluralSelector, RuleRegistry};
use pretty_assertions::assert_eq;
use serde_json::json;

fn with_forms(locale: &str, forms: &[&str]) -> Polyglot {
    Polyglot::new(
        PolyglotOptions::new()
            .phrases(json!({ "n": forms.join(" |||| ") }))
            .locale(locale),
    )
    .unwrap()
}

/// `counts[i]` must all render with form `i`, where `%{smart_count}` is the count.
fn assert_groups(p: &Polyglot, forms: &[&str], groups: &[&[i64]]) {
    for (form, counts) in forms.iter().zip(groups) {
        for &c in *counts {
            let expected = form.replace("%{smart_count}", &c.to_string());
            assert_eq!(p.t_with("n", c), expected, "locale {} count {c}", p.locale());
        }
    }
}

#[test]
fn arabic_six_forms() {
    let forms = [
        "ولا صوت",
        "صوت واحد",
        "صوتان",
        "%{smart_count} أصوات",
        "%{smart_count} صوت",
        "%{smart_count} صوت",
    ];
    let p = with_forms("ar", &forms);
    assert_eq!(p.t_with("n", 0), "ولا صوت");
    assert_eq!(p.t_with("n", 1), "صوت واحد");
    assert_eq!(p.t_with("n", 2), "صوتان");
    assert_eq!(p.t_with("n", 3), "3 أصوات");
    assert_eq!(p.t_with("n", 11), "11 صوت");
    assert_eq!(p.t_with("n", 102), "102 صوت");
}

#[test]
fn russian_by_language_and_locale() {
    let forms = ["%{smart_count} машина", "%{smart_count} машины", "%{smart_count} машин"];
    let groups: [&[i64]; 3] = [&[1, 101], &[932, 324], &[11, 112, 12, 13, 14, 15]];
    for locale in ["ru", "ru-RU"] {
        assert_groups(&with_forms(locale, &forms), &forms, &groups);
    }
}

#[test]
fn croatian() {
    let forms = ["%{smart_count} glas", "%{smart_count} glasa", "%{smart_count} glasova"];
    let groups: [&[i64]; 3] = [
        &[1, 21, 31, 101],
        &[2, 3, 4, 22, 23, 24, 32, 33, 34],
        &[0, 5, 6, 11, 12, 13, 14, 15, 16, 17, 25, 26, 35, 36, 112, 113, 114],
    ];
    for locale in ["hr", "hr-HR"] {
        assert_groups(&with_forms(locale, &forms), &forms, &groups);
    }
}

#[test]
fn serbian_latin_and_cyrillic() {
    let forms = ["%{smart_count} miš", "%{smart_count} miša", "%{smart_count} miševa"];
    let groups: [&[i64]; 3] = [&[1, 101], &[932, 324], &[11, 12, 13, 14, 15, 0]];
    for locale in ["srl-RS", "sr-RS"] {
        assert_groups(&with_forms(locale, &forms), &forms, &groups);
    }
}

#[test]
fn bosnian_latin_and_cyrillic() {
    let forms = ["%{smart_count} članak", "%{smart_count} članka", "%{smart_count} članaka"];
    let groups: [&[i64]; 3] = [
        &[1, 101],
        &[932, 324],
        &[11, 12, 13, 14, 15, 112, 113, 114, 115, 0],
    ];
    for locale in ["bs-Latn-BA", "bs-Cyrl-BA"] {
        assert_groups(&with_forms(locale, &forms), &forms, &groups);
    }
}

#[test]
fn czech() {
    let forms = ["%{smart_count} komentář", "%{smart_count} komentáře", "%{smart_count} komentářů"];
    let groups: [&[i64]; 3] = [&[1], &[2, 3, 4], &[0, 11, 12, 16]];
    assert_groups(&with_forms("cs-CZ", &forms), &forms, &groups);
}

#[test]
fn slovenian() {
    let forms = [
        "%{smart_count} komentar",
        "%{smart_count} komentarja",
        "%{smart_count} komentarji",
        "%{smart_count} komentarjev",
    ];
    let groups: [&[i64]; 4] = [
        &[1, 12301, 101, 1001, 201, 301],
        &[2, 102, 202, 302],
        &[3, 4, 103, 304],
        &[0, 11, 12, 13, 14, 52, 53],
    ];
    assert_groups(&with_forms("sl-SL", &forms), &forms, &groups);
}

#[test]
fn turkish_uses_two_forms() {
    let forms = [
        "Sepetinizde %{smart_count} X var. Bunu almak istiyor musunuz?",
        "Sepetinizde %{smart_count} X var. Bunları almak istiyor musunuz?",
    ];
    let groups: [&[i64]; 2] = [&[1], &[2]];
    assert_groups(&with_forms("tr", &forms), &forms, &groups);
}

#[test]
fn lithuanian() {
    let forms = ["%{smart_count} balsas", "%{smart_count} balsai", "%{smart_count} balsų"];
    let groups: [&[i64]; 3] = [&[1, 91], &[2, 9, 92, 102], &[0, 10, 11, 12, 90]];
    assert_groups(&with_forms("lt", &forms), &forms, &groups);
}

#[test]
fn region_subtag_is_ignored() {
    let p = with_forms("fr-FR", &["%{smart_count} Name", "%{smart_count} Names"]);
    assert_eq!(p.t_with("n", 0), "0 Name");
}

#[test]
fn custom_rules_replace_the_defaults() {
    let german_like: PluralSelector = Arc::new(|n: f64| usize::from(n != 1.0));
    let french_like: PluralSelector = Arc::new(|n: f64| usize::from(n > 1.0));
    let rules = Arc::new(
        RuleRegistry::new(
            [("germanLike", german_like), ("frenchLike", french_like)],
            [("germanLike", vec!["x1", "en"]), ("frenchLike", vec!["x2"])],
        )
        .unwrap(),
    );

    let make = |locale: &str| {
        Polyglot::new(
            PolyglotOptions::new()
                .phrases(json!({
                    "test_phrase": "%{smart_count} form zero |||| %{smart_count} form one"
                }))
                .locale(locale)
                .plural_rules(rules.clone()),
        )
        .unwrap()
    };

    let x1 = make("x1");
    assert_eq!(x1.t_with("test_phrase", 0), "0 form one");
    assert_eq!(x1.t_with("test_phrase", 1), "1 form zero");
    assert_eq!(x1.t_with("test_phrase", 2), "2 form one");

    let x2 = make("x2");
    assert_eq!(x2.t_with("test_phrase", 0), "0 form zero");
    assert_eq!(x2.t_with("test_phrase", 1), "1 form zero");
    assert_eq!(x2.t_with("test_phrase", 2), "2 form one");

    // Built-in locales are gone; `ru` now resolves through `en`.
    let ru = make("ru");
    assert_eq!(ru.t_with("test_phrase", 5), "5 form one");
}
