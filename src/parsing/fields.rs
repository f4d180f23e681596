//! Numeric, flag and timestamp parsing for hand-entered listing fields.
//!
//! Listing attributes arrive as free text typed by brokers: comma-grouped
//! prices (`"45,000"`), areas with a unit glued on (`"84.5㎡"`), floors such as
//! `"3층"` or `"B1"`. Everything here is total: bad input never fails, it
//! degrades to "absent".
//!
//! # Zero-as-absent
//!
//! [`parse_number`] returns `0.0` for empty or unparseable text, and the
//! scorers treat a zero as "field not filled in". [`parse_present`] is the
//! typed form of that convention and is what scoring code should use. Areas,
//! prices and ratings are never negative, so it drops those too.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid number pattern"));

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("valid integer pattern"));

const TRUTHY_TOKENS: &[&str] = &["true", "1", "y", "yes", "o", "예", "있음", "가능"];

/// Parse the leading number of a loosely formatted field.
///
/// Thousands separators and surrounding whitespace are ignored and any
/// trailing unit text is dropped. Blank or non-numeric input yields `0.0`.
///
/// ```rust
/// use cohortmap::parsing::parse_number;
///
/// assert_eq!(parse_number("45,000"), 45000.0);
/// assert_eq!(parse_number(" 84.5㎡ "), 84.5);
/// assert_eq!(parse_number("협의"), 0.0);
/// ```
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    LEADING_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse an optional field, mapping missing, blank, unparseable, zero and
/// negative values to `None`.
pub fn parse_present(text: Option<&str>) -> Option<f64> {
    text.map(parse_number).filter(|value| *value > 0.0)
}

/// Parse the leading integer of a field (`"3층"` → 3, `"-1"` → -1).
///
/// Returns `None` when the text does not start with an integer, which lets
/// callers fall back to pattern checks (`"B1"`, `"지하"`).
pub fn parse_integer(text: &str) -> Option<i64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    LEADING_INTEGER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Whether an optional field carries any non-blank value.
pub fn is_present(text: Option<&str>) -> bool {
    text.is_some_and(|value| !value.trim().is_empty())
}

/// Interpret a checkbox-style field.
pub fn parse_flag(text: Option<&str>) -> bool {
    text.map(|value| value.trim().to_lowercase())
        .is_some_and(|value| TRUTHY_TOKENS.contains(&value.as_str()))
}

/// Parse a last-update timestamp.
///
/// Accepts RFC 3339 (converted to UTC), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and bare `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
