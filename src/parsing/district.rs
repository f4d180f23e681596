//! District extraction from free-text addresses.
//!
//! The district (`구`) is the coarsest geographic key used to group
//! comparable listings. Addresses are typed by hand, so the extractor scans
//! for the first run of Hangul syllables that ends in the district suffix
//! rather than relying on a fixed token position. Runs that belong to a
//! metropolitan city name (대구, or anything followed by `광역시`) are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Suffix marking an administrative district.
pub const DISTRICT_SUFFIX: char = '구';

/// Metropolitan cities whose own name ends in the district suffix.
const CITY_NAMES: &[&str] = &["대구"];

// Lazy quantifier so "강남구역삼동" yields "강남구", not the longest run.
static HANGUL_DISTRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[가-힣]+?구").expect("valid district pattern"));

static ROMANIZED_DISTRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z]+-gu\b").expect("valid romanized district pattern"));

/// Extract the district token from an address.
///
/// Returns the run of characters preceding the district suffix together with
/// the suffix itself, or `None` when the address has no district.
///
/// ```rust
/// use cohortmap::parsing::extract_district;
///
/// assert_eq!(
///     extract_district("서울특별시 강남구 역삼동 123-4").as_deref(),
///     Some("강남구")
/// );
/// assert_eq!(extract_district(""), None);
/// ```
pub fn extract_district(address: &str) -> Option<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return None;
    }

    let hangul = HANGUL_DISTRICT
        .find_iter(trimmed)
        .find(|m| !is_city_name(m.as_str(), &trimmed[m.end()..]));
    let romanized = ROMANIZED_DISTRICT.find(trimmed);

    // Whichever token appears first in the address wins.
    match (hangul, romanized) {
        (Some(h), Some(r)) if r.start() < h.start() => Some(normalize_romanized(r.as_str())),
        (Some(h), _) => Some(h.as_str().to_string()),
        (None, Some(r)) => Some(normalize_romanized(r.as_str())),
        (None, None) => None,
    }
}

// "대구광역시 수성구" must not yield "대구".
fn is_city_name(token: &str, rest: &str) -> bool {
    CITY_NAMES.contains(&token)
        || rest.starts_with("광역시")
        || rest
            .strip_prefix('시')
            .is_some_and(|after| !after.starts_with(|c: char| ('가'..='힣').contains(&c)))
}

fn normalize_romanized(token: &str) -> String {
    let lower = token.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}
