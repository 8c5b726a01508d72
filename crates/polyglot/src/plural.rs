//! Built-in plural rules.
//!
//! Each [`PluralType`] maps a count to a zero-based index into the
//! `||||`-separated variants of a phrase, and names the locale tags that
//! use it. Counts are `f64` so fractional values (`1.5`) go through the
//! same modulo arithmetic as whole numbers.

use std::fmt;

/// A named plural-form selection rule shared by a group of locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluralType {
    Arabic,
    BosnianSerbian,
    Chinese,
    Croatian,
    French,
    German,
    Russian,
    Lithuanian,
    Czech,
    Polish,
    Icelandic,
    Slovenian,
}

impl PluralType {
    pub const ALL: [PluralType; 12] = [
        PluralType::Arabic,
        PluralType::BosnianSerbian,
        PluralType::Chinese,
        PluralType::Croatian,
        PluralType::French,
        PluralType::German,
        PluralType::Russian,
        PluralType::Lithuanian,
        PluralType::Czech,
        PluralType::Polish,
        PluralType::Icelandic,
        PluralType::Slovenian,
    ];

    /// Identifier used as the category name in a [`RuleRegistry`](crate::RuleRegistry).
    pub fn name(self) -> &'static str {
        match self {
            PluralType::Arabic => "arabic",
            PluralType::BosnianSerbian => "bosnian_serbian",
            PluralType::Chinese => "chinese",
            PluralType::Croatian => "croatian",
            PluralType::French => "french",
            PluralType::German => "german",
            PluralType::Russian => "russian",
            PluralType::Lithuanian => "lithuanian",
            PluralType::Czech => "czech",
            PluralType::Polish => "polish",
            PluralType::Icelandic => "icelandic",
            PluralType::Slovenian => "slovenian",
        }
    }

    /// Number of distinct forms the rule can select.
    pub fn form_count(self) -> usize {
        match self {
            PluralType::Arabic => 6,
            PluralType::Slovenian => 4,
            PluralType::BosnianSerbian
            | PluralType::Croatian
            | PluralType::Russian
            | PluralType::Lithuanian
            | PluralType::Czech
            | PluralType::Polish => 3,
            PluralType::French | PluralType::German | PluralType::Icelandic => 2,
            PluralType::Chinese => 1,
        }
    }

    /// Locale tags bound to this rule in the default registry.
    pub fn locales(self) -> &'static [&'static str] {
        match self {
            PluralType::Arabic => &["ar"],
            PluralType::BosnianSerbian => &["bs-Latn-BA", "bs-Cyrl-BA", "srl-RS", "sr-RS"],
            PluralType::Chinese => &[
                "id", "id-ID", "ja", "ko", "ko-KR", "lo", "ms", "th", "th-TH", "zh",
            ],
            PluralType::Croatian => &["hr", "hr-HR"],
            PluralType::German => &[
                "fa", "da", "de", "en", "es", "fi", "el", "he", "hi-IN", "hu", "hu-HU", "it", "nl",
                "no", "pt", "sv", "tr",
            ],
            PluralType::French => &["fr", "tl", "pt-br"],
            PluralType::Russian => &["ru", "ru-RU"],
            PluralType::Lithuanian => &["lt"],
            PluralType::Czech => &["cs", "cs-CZ", "sk"],
            PluralType::Polish => &["pl"],
            PluralType::Icelandic => &["is"],
            PluralType::Slovenian => &["sl-SL"],
        }
    }

    /// Select the form index for `count`.
    pub fn select(self, count: f64) -> usize {
        match self {
            PluralType::Arabic => arabic(count),
            PluralType::BosnianSerbian | PluralType::Croatian | PluralType::Russian => {
                slavic(count)
            }
            PluralType::Chinese => 0,
            PluralType::French => usize::from(count >= 2.0),
            PluralType::German => usize::from(count != 1.0),
            PluralType::Lithuanian => lithuanian(count),
            PluralType::Czech => czech(count),
            PluralType::Polish => polish(count),
            PluralType::Icelandic => usize::from(count % 10.0 != 1.0 || count % 100.0 == 11.0),
            PluralType::Slovenian => slovenian(count),
        }
    }
}

impl fmt::Display for PluralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Counts below 3 are their own index. A fractional or negative count has no
// matching variant and lands on the first one.
fn arabic(n: f64) -> usize {
    if n < 3.0 {
        return if n >= 0.0 && n.fract() == 0.0 {
            n as usize
        } else {
            0
        };
    }
    let last_two = n % 100.0;
    if (3.0..=10.0).contains(&last_two) {
        3
    } else if last_two >= 11.0 {
        4
    } else {
        5
    }
}

fn slavic(n: f64) -> usize {
    let last_two = n % 100.0;
    let end = last_two % 10.0;
    if last_two != 11.0 && end == 1.0 {
        return 0;
    }
    if (2.0..=4.0).contains(&end) && !(12.0..=14.0).contains(&last_two) {
        return 1;
    }
    2
}

fn lithuanian(n: f64) -> usize {
    let end = n % 10.0;
    let last_two = n % 100.0;
    if end == 1.0 && last_two != 11.0 {
        return 0;
    }
    if (2.0..=9.0).contains(&end) && !(11.0..=19.0).contains(&last_two) {
        1
    } else {
        2
    }
}

fn czech(n: f64) -> usize {
    if n == 1.0 {
        0
    } else if (2.0..=4.0).contains(&n) {
        1
    } else {
        2
    }
}

fn polish(n: f64) -> usize {
    if n == 1.0 {
        return 0;
    }
    let end = n % 10.0;
    let last_two = n % 100.0;
    if (2.0..=4.0).contains(&end) && (last_two < 10.0 || last_two >= 20.0) {
        1
    } else {
        2
    }
}

fn slovenian(n: f64) -> usize {
    let last_two = n % 100.0;
    if last_two == 1.0 {
        0
    } else if last_two == 2.0 {
        1
    } else if last_two == 3.0 || last_two == 4.0 {
        2
    } else {
        3
    }
}
