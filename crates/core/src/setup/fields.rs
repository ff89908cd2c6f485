//! Field-level checks.
//!
//! Each helper validates one scalar against one rule, appending at most
//! one message to the caller's [`ErrorMap`] under the given path. Wizard
//! payloads are free-form JSON, so every helper tolerates missing keys,
//! `null`, and wrong JSON types; a shape problem and an out-of-range
//! value surface the same way, as a message on the field path.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use super::result::ErrorMap;

/// Fetch a field from a step payload, treating JSON `null` as absent.
pub(crate) fn field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data.get(key) {
        Some(Value::Null) | None => None,
        other => other,
    }
}

/// Required non-empty string. Returns the string when present.
pub(crate) fn required_str<'a>(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&'a Value>,
    label: &str,
) -> Option<&'a str> {
    match value {
        None => {
            errors.add(path, format!("{label} is required"));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.add(path, format!("{label} is required"));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.add(path, format!("{label} must be a string"));
            None
        }
    }
}

/// Optional string. Errors only when present with a non-string type.
pub(crate) fn optional_str<'a>(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&'a Value>,
    label: &str,
) -> Option<&'a str> {
    match value {
        None => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.add(path, format!("{label} must be a string"));
            None
        }
    }
}

/// Character-count bounds on an already-extracted string.
pub(crate) fn check_length(
    errors: &mut ErrorMap,
    path: &str,
    s: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    let len = s.chars().count();
    if len < min || len > max {
        errors.add(
            path,
            format!("{label} must be between {min} and {max} characters"),
        );
    }
}

/// Upper character-count bound only (for optional free text).
pub(crate) fn check_max_length(
    errors: &mut ErrorMap,
    path: &str,
    s: &str,
    max: usize,
    label: &str,
) {
    if s.chars().count() > max {
        errors.add(path, format!("{label} cannot exceed {max} characters"));
    }
}

/// Optional integer bounded to `[min, max]`. A present non-integer value
/// and an out-of-range value produce the same message.
pub(crate) fn optional_int_in_range(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&Value>,
    min: i64,
    max: i64,
    label: &str,
) -> Option<i64> {
    let value = value?;
    match value.as_i64() {
        Some(n) if (min..=max).contains(&n) => Some(n),
        _ => {
            errors.add(
                path,
                format!("{label} must be an integer between {min} and {max}"),
            );
            None
        }
    }
}

/// Optional numeric value bounded to `[min, max]`.
pub(crate) fn optional_number_in_range(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&Value>,
    min: f64,
    max: f64,
    label: &str,
) -> Option<f64> {
    let value = value?;
    match value.as_f64() {
        Some(n) if n >= min && n <= max => Some(n),
        _ => {
            errors.add(path, format!("{label} must be a number between {min} and {max}"));
            None
        }
    }
}

/// Required membership in a fixed value set.
pub(crate) fn required_enum<'a>(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&'a Value>,
    allowed: &[&str],
    label: &str,
) -> Option<&'a str> {
    match value.and_then(Value::as_str) {
        Some(s) if allowed.contains(&s) => Some(s),
        Some(_) => {
            errors.add(
                path,
                format!("{label} must be one of: {}", allowed.join(", ")),
            );
            None
        }
        None => {
            errors.add(path, format!("{label} is required"));
            None
        }
    }
}

/// Optional membership in a fixed value set.
pub(crate) fn optional_enum<'a>(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&'a Value>,
    allowed: &[&str],
    label: &str,
) -> Option<&'a str> {
    let value = value?;
    match value.as_str() {
        Some(s) if allowed.contains(&s) => Some(s),
        _ => {
            errors.add(
                path,
                format!("{label} must be one of: {}", allowed.join(", ")),
            );
            None
        }
    }
}

/// Wizard dates travel as `YYYY-MM-DD` strings.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Required parseable date.
pub(crate) fn required_date(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&Value>,
    label: &str,
) -> Option<NaiveDate> {
    match value {
        None => {
            errors.add(path, format!("{label} is required"));
            None
        }
        Some(v) => match v.as_str().and_then(parse_date) {
            Some(date) => Some(date),
            None => {
                errors.add(path, format!("{label} must be a valid date (YYYY-MM-DD)"));
                None
            }
        },
    }
}

/// Optional parseable date. Errors only when present but unparseable.
pub(crate) fn optional_date(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&Value>,
    label: &str,
) -> Option<NaiveDate> {
    let value = value?;
    match value.as_str().and_then(parse_date) {
        Some(date) => Some(date),
        None => {
            errors.add(path, format!("{label} must be a valid date (YYYY-MM-DD)"));
            None
        }
    }
}

/// Optional boolean flag.
pub(crate) fn optional_bool(
    errors: &mut ErrorMap,
    path: &str,
    value: Option<&Value>,
    label: &str,
) -> Option<bool> {
    let value = value?;
    match value.as_bool() {
        Some(b) => Some(b),
        None => {
            errors.add(path, format!("{label} must be true or false"));
            None
        }
    }
}

/// Form checkboxes arrive as `true` or `1` depending on the client.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(v) => v.as_i64() == Some(1),
        None => false,
    }
}

/// Email format check on an already-extracted string.
pub(crate) fn check_email(errors: &mut ErrorMap, path: &str, s: &str, label: &str) {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
    });
    if !re.is_match(s) {
        errors.add(path, format!("{label} must be a valid email address"));
    }
}
