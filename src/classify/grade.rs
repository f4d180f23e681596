//! Below-grade (basement / semi-basement) detection.
//!
//! Precedence, highest first:
//!
//! 1. rooftop flag: always above grade, whatever the floor says
//! 2. semi-basement flag: always below grade
//! 3. numeric floor: `< 1` is below grade
//! 4. basement markers in a non-numeric floor (`B1`, `지하`, `반지하`)
//! 5. otherwise above grade

use crate::core::Listing;
use crate::parsing::{parse_flag, parse_integer};
use once_cell::sync::Lazy;
use regex::Regex;

static BASEMENT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(^\s*b\s*\d)|지하|반지하|basement").expect("valid basement pattern")
});

/// Whether the listing sits below ground level.
pub fn is_below_grade(listing: &Listing) -> bool {
    let fields = &listing.fields;

    if parse_flag(fields.rooftop.as_deref()) {
        return false;
    }
    if parse_flag(fields.semi_basement.as_deref()) {
        return true;
    }

    match fields.floor.as_deref() {
        Some(floor) => match parse_integer(floor) {
            Some(level) => level < 1,
            None => BASEMENT_MARKER.is_match(floor),
        },
        None => false,
    }
}
