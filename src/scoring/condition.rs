use crate::core::ListingFields;
use crate::parsing::parse_present;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Star rating of the listing's condition.
///
/// `None` when the rating is absent or outside 1 to 5 stars.
pub fn score_condition(fields: &ListingFields) -> Option<f64> {
    parse_present(fields.rating.as_deref())
        .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
}
