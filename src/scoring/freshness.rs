//! Freshness: how recently an on-market listing was touched.
//!
//! Freshness decays linearly from the ceiling (10) by a fixed amount per
//! elapsed day and floors at zero, so with the default 0.2/day a listing
//! untouched for 50 days scores exactly 0. Off-market listings have no
//! freshness at all.

use chrono::NaiveDateTime;

use super::round_to_tenth;
use crate::config::ScoringConfig;
use crate::core::Listing;
use crate::parsing::parse_timestamp;

/// Whole days elapsed between the last update and `as_of`.
///
/// Negative when the update timestamp lies after `as_of`.
pub fn days_since_update(listing: &Listing, as_of: NaiveDateTime) -> Option<i64> {
    let updated = parse_timestamp(listing.fields.updated_at.as_deref()?)?;
    Some((as_of - updated).num_days())
}

/// Freshness of a listing as of a reference instant.
///
/// `None` for off-market listings and for listings without a readable
/// update timestamp.
pub fn score_freshness(
    listing: &Listing,
    as_of: NaiveDateTime,
    config: &ScoringConfig,
) -> Option<f64> {
    if !listing.on_market {
        return None;
    }
    let days = days_since_update(listing, as_of)?;
    let decayed = config.freshness_ceiling - config.freshness_decay_per_day * days as f64;
    Some(round_to_tenth(decayed.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StructuralType;
    use chrono::{Duration, NaiveDate};

    fn as_of() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn updated_days_ago(days: i64, on_market: bool) -> Listing {
        let mut listing = Listing::new(1, StructuralType::Apartment, "서울 강동구");
        listing.on_market = on_market;
        listing.fields.updated_at =
            Some((as_of() - Duration::days(days)).format("%Y-%m-%d %H:%M:%S").to_string());
        listing
    }

    #[test]
    fn fresh_listing_scores_ceiling() {
        let config = ScoringConfig::default();
        assert_eq!(score_freshness(&updated_days_ago(0, true), as_of(), &config), Some(10.0));
    }

    #[test]
    fn decays_two_tenths_per_day() {
        let config = ScoringConfig::default();
        assert_eq!(score_freshness(&updated_days_ago(3, true), as_of(), &config), Some(9.4));
        assert_eq!(score_freshness(&updated_days_ago(49, true), as_of(), &config), Some(0.2));
    }

    #[test]
    fn floors_at_zero_from_day_fifty() {
        let config = ScoringConfig::default();
        assert_eq!(score_freshness(&updated_days_ago(50, true), as_of(), &config), Some(0.0));
        assert_eq!(score_freshness(&updated_days_ago(400, true), as_of(), &config), Some(0.0));
    }

    #[test]
    fn off_market_listing_has_no_freshness() {
        let config = ScoringConfig::default();
        assert_eq!(score_freshness(&updated_days_ago(1, false), as_of(), &config), None);
    }

    #[test]
    fn unreadable_timestamp_is_not_computable() {
        let mut listing = updated_days_ago(1, true);
        listing.fields.updated_at = Some("지난주".into());
        assert_eq!(score_freshness(&listing, as_of(), &ScoringConfig::default()), None);

        listing.fields.updated_at = None;
        assert_eq!(score_freshness(&listing, as_of(), &ScoringConfig::default()), None);
    }

    #[test]
    fn future_update_exceeds_ceiling() {
        let mut listing = updated_days_ago(0, true);
        listing.fields.updated_at = Some("2024-07-05 12:00:00".into());
        assert_eq!(
            score_freshness(&listing, as_of(), &ScoringConfig::default()),
            Some(11.0)
        );
    }
}
