use crate::core::ListingFields;
use crate::parsing::parse_present;

/// Reference area of the listing, `None` when missing, zero or negative.
pub fn score_size(fields: &ListingFields) -> Option<f64> {
    parse_present(fields.area.as_deref())
}
