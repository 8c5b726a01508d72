use std::collections::HashMap;

use serde_json::Value;

use crate::PolyglotError;

/// Key whose numeric value selects the plural form.
pub const SMART_COUNT: &str = "smart_count";

/// Key holding a fallback phrase when a translation is missing.
pub const DEFAULT_PHRASE: &str = "_";

/// A substitution value.
#[derive(Clone, Debug, PartialEq)]
pub enum SubValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Present but empty; never replaces a placeholder.
    Null,
}

impl SubValue {
    /// Interpolated text, or `None` for [`SubValue::Null`].
    pub fn to_text(&self) -> Option<String> {
        match self {
            SubValue::Str(s) => Some(s.clone()),
            SubValue::Int(i) => Some(i.to_string()),
            SubValue::Float(f) => Some(number_text(*f)),
            SubValue::Bool(b) => Some(b.to_string()),
            SubValue::Null => None,
        }
    }

    /// Numeric value, for plural selection.
    pub fn as_count(&self) -> Option<f64> {
        match self {
            SubValue::Int(i) => Some(*i as f64),
            SubValue::Float(f) => Some(*f),
            SubValue::Str(s) => s.trim().parse().ok(),
            SubValue::Bool(_) | SubValue::Null => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SubValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for SubValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for SubValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&String> for SubValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<i64> for SubValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SubValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for SubValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<usize> for SubValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for SubValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for SubValue {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<bool> for SubValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<SubValue>> From<Option<T>> for SubValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SubValue::Null, Into::into)
    }
}

impl From<&Value> for SubValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => SubValue::Null,
            Value::Bool(b) => SubValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SubValue::Int(i),
                None => n.as_f64().map_or(SubValue::Null, SubValue::Float),
            },
            Value::String(s) => SubValue::Str(s.clone()),
            other => SubValue::Str(other.to_string()),
        }
    }
}

// Number text in the shape scripting hosts print it: `Infinity`, `NaN`,
// exponent form past 1e21 and below 1e-6, and no negative zero.
fn number_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{f:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    f.to_string()
}

/// Values for a phrase: a bare count, or named values.
///
/// A bare count behaves exactly like a map holding only `smart_count`.
#[derive(Clone, Debug, PartialEq)]
pub enum Substitutions {
    Count(f64),
    Map(HashMap<String, SubValue>),
}

impl Substitutions {
    /// An empty map.
    pub fn new() -> Self {
        Self::Map(HashMap::new())
    }

    /// Add a named value. A bare count is first turned into a map.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<SubValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SubValue>) {
        if let Substitutions::Count(n) = *self {
            *self = Substitutions::Map(HashMap::from([(
                SMART_COUNT.to_string(),
                SubValue::Float(n),
            )]));
        }
        if let Substitutions::Map(map) = self {
            map.insert(name.into(), value.into());
        }
    }

    /// Look up a named value; a bare count answers only to `smart_count`.
    pub fn get(&self, name: &str) -> Option<SubValue> {
        match self {
            Substitutions::Count(n) => (name == SMART_COUNT).then_some(SubValue::Float(*n)),
            Substitutions::Map(map) => map.get(name).cloned(),
        }
    }

    /// The count driving plural selection, if `smart_count` is set.
    ///
    /// A value with no numeric reading still selects a form, as `NaN`.
    pub fn smart_count(&self) -> Option<f64> {
        match self {
            Substitutions::Count(n) => Some(*n),
            Substitutions::Map(map) => match map.get(SMART_COUNT)? {
                SubValue::Null => None,
                value => Some(value.as_count().unwrap_or(f64::NAN)),
            },
        }
    }

    /// The `_` fallback phrase, if one was supplied as a string.
    pub fn default_phrase(&self) -> Option<&str> {
        match self {
            Substitutions::Count(_) => None,
            Substitutions::Map(map) => map.get(DEFAULT_PHRASE).and_then(SubValue::as_str),
        }
    }

    /// Convert a JSON number or object. `null` means no substitutions.
    pub fn from_json(value: &Value) -> Result<Option<Self>, PolyglotError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(|n| Some(Substitutions::Count(n))).ok_or_else(|| {
                PolyglotError::InvalidArgument(format!("count `{n}` is not representable"))
            }),
            Value::Object(obj) => Ok(Some(Substitutions::Map(
                obj.iter()
                    .map(|(k, v)| (k.clone(), SubValue::from(v)))
                    .collect(),
            ))),
            other => Err(PolyglotError::InvalidArgument(format!(
                "substitutions must be a number or an object, got `{other}`"
            ))),
        }
    }
}

impl Default for Substitutions {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! count_shorthand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Substitutions {
                fn from(n: $t) -> Self {
                    Substitutions::Count(n as f64)
                }
            }
        )*
    };
}

count_shorthand!(i32, i64, u32, u64, usize, f32, f64);

impl<K: Into<String>, V: Into<SubValue>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Substitutions::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
