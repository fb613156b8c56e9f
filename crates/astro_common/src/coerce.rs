//! Typed coercion toolkit for untyped generative-model JSON.
//!
//! Each helper takes an optional `serde_json::Value` and returns a typed
//! value, reporting through [`Coerced`] whether the payload supplied it or a
//! documented default was substituted. Nothing here panics or fails.

use serde_json::{Map, Value};

/// Outcome of coercing one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    /// The payload supplied a usable value.
    Parsed(T),
    /// The payload value was absent or unusable; the default was used.
    Defaulted(T),
}

impl<T> Coerced<T> {
    pub fn value(self) -> T {
        match self {
            Coerced::Parsed(v) | Coerced::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Coerced::Defaulted(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Coerced<U> {
        match self {
            Coerced::Parsed(v) => Coerced::Parsed(f(v)),
            Coerced::Defaulted(v) => Coerced::Defaulted(f(v)),
        }
    }
}

/// First non-null value under any of `keys`.
pub fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

/// Integer coercion: integer, then float truncated, then numeric string, then default.
pub fn int(value: Option<&Value>, default: i64) -> Coerced<i64> {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    };
    match parsed {
        Some(v) => Coerced::Parsed(v),
        None => Coerced::Defaulted(default),
    }
}

/// Integer coercion followed by clamping into `[lo, hi]`.
pub fn clamped_int(value: Option<&Value>, lo: i64, hi: i64, default: i64) -> Coerced<i64> {
    int(value, default).map(|v| v.clamp(lo, hi))
}

/// Non-empty trimmed text. Numbers and booleans are rendered as text.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn text_or(value: Option<&Value>, default: &str) -> Coerced<String> {
    match text(value) {
        Some(s) => Coerced::Parsed(s),
        None => Coerced::Defaulted(default.to_string()),
    }
}

/// List of non-empty strings, truncated to `max`.
///
/// Accepts a JSON array (non-text elements dropped) or a comma-separated string.
pub fn text_list(value: Option<&Value>, max: usize) -> Vec<String> {
    let items: Vec<String> = match value {
        Some(Value::Array(items)) => items.iter().filter_map(|v| text(Some(v))).collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    items.into_iter().take(max).collect()
}

/// Array elements that are JSON objects; anything else is dropped.
pub fn object_list(value: Option<&Value>) -> Vec<&Map<String, Value>> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

/// Closed-enum coercion through a parser; unrecognised values fall back to `default`.
pub fn enum_value<T>(
    value: Option<&Value>,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> Coerced<T> {
    match text(value).as_deref().and_then(parse) {
        Some(v) => Coerced::Parsed(v),
        None => Coerced::Defaulted(default),
    }
}

/// Boolean from `true`/`false`, `"true"`/`"yes"`/`"false"`/`"no"`, or 0/1.
pub fn flag(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Upper-cases the first letter of each word and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Canonical weekday name, or `None` if `s` is not a weekday.
pub fn weekday(s: &str) -> Option<&'static str> {
    let wanted = s.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|day| day.eq_ignore_ascii_case(wanted) || day[..3].eq_ignore_ascii_case(wanted))
}

/// URL-safe identifier from a display name.
pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
