//! The "other" dimension: a checklist score of orientation and amenities.
//!
//! Starts from a base and accumulates flat bonuses (south-facing, parking,
//! elevator, pets) plus per-item bonuses for the security and general
//! amenity checklists. An elevator counts twice: once as the flat bonus and
//! once as an amenity item. The score never falls below the base, so this
//! scorer always produces a value.

use super::round_to_tenth;
use crate::config::AmenityWeights;
use crate::core::ListingFields;
use crate::parsing::is_present;

const SOUTH_FACING: &[&str] = &["남", "남동", "남서", "s", "se", "sw", "south", "southeast", "southwest"];

const ELEVATOR_MARKERS: &[&str] = &["엘리베이터", "elevator"];

/// Whether a direction entry faces south, south-east or south-west.
///
/// A trailing `향` (`"남향"`) and separators (`"south-east"`) are ignored.
pub fn is_south_facing(direction: &str) -> bool {
    let normalized: String = direction
        .trim()
        .trim_end_matches('향')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase();

    SOUTH_FACING.contains(&normalized.as_str())
}

fn is_elevator(item: &str) -> bool {
    let item = item.trim().to_lowercase();
    ELEVATOR_MARKERS.iter().any(|marker| item == *marker)
}

fn count_items(items: &[String]) -> usize {
    items.iter().filter(|item| !item.trim().is_empty()).count()
}

/// Amenity score of a listing, capped at the configured ceiling and rounded
/// to one decimal.
pub fn score_other(fields: &ListingFields, weights: &AmenityWeights) -> f64 {
    let mut score = weights.base;

    if fields.direction.as_deref().is_some_and(is_south_facing) {
        score += weights.south_facing;
    }
    if is_present(fields.parking_available.as_deref()) {
        score += weights.parking;
    }
    if fields.house_other.iter().any(|item| is_elevator(item)) {
        score += weights.elevator;
    }
    if is_present(fields.pet_allowed.as_deref()) {
        score += weights.pets;
    }

    score += weights.security_item * count_items(&fields.house_security) as f64;
    score += weights.amenity_item * count_items(&fields.house_other) as f64;

    round_to_tenth(score.min(weights.ceiling))
}
