//! Raw dimension scorers.
//!
//! Each scorer is a pure function of one listing plus cohort-independent
//! context and returns `None` when the score cannot be computed. No scorer
//! looks at other listings; cohort logic lives in [`crate::cohort`].

pub mod amenities;
pub mod condition;
pub mod freshness;
pub mod price;
pub mod size;

pub use amenities::{is_south_facing, score_other};
pub use condition::score_condition;
pub use freshness::{days_since_update, score_freshness};
pub use price::score_price;
pub use size::score_size;

use crate::config::ScoringConfig;
use crate::core::{Dimension, Listing, TradeContext};
use chrono::NaiveDateTime;

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Cohort-independent inputs shared by every scorer call of one query.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Trade context priced against; the price dimension is absent without one.
    pub trade: Option<TradeContext>,
    /// Reference instant for freshness.
    pub as_of: NaiveDateTime,
    pub config: &'a ScoringConfig,
}

impl<'a> ScoringContext<'a> {
    pub fn new(as_of: NaiveDateTime, config: &'a ScoringConfig) -> Self {
        Self {
            trade: None,
            as_of,
            config,
        }
    }

    pub fn with_trade(mut self, trade: TradeContext) -> Self {
        self.trade = Some(trade);
        self
    }

    /// Keep an explicit trade, otherwise price against the listing's
    /// primary trade context.
    pub fn for_listing(self, listing: &Listing) -> Self {
        match self.trade {
            Some(_) => self,
            None => Self {
                trade: listing.primary_trade(),
                ..self
            },
        }
    }
}

/// Raw score of one listing on one dimension.
pub fn score_dimension(
    listing: &Listing,
    dimension: Dimension,
    context: &ScoringContext<'_>,
) -> Option<f64> {
    match dimension {
        Dimension::Price => context
            .trade
            .and_then(|trade| score_price(&listing.fields, trade, context.config)),
        Dimension::Size => score_size(&listing.fields),
        Dimension::Condition => score_condition(&listing.fields),
        Dimension::Freshness => score_freshness(listing, context.as_of, context.config),
        Dimension::Other => Some(score_other(&listing.fields, &context.config.amenities)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StructuralType;
    use chrono::NaiveDate;

    fn as_of() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn round_to_tenth_rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(6.8999999), 6.9);
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(4.0), 4.0);
    }

    #[test]
    fn price_needs_trade_context() {
        let config = ScoringConfig::default();
        let mut listing = Listing::new(1, StructuralType::Office, "서울 중구");
        listing.fields.trade_types = vec!["매매".into()];
        listing.fields.area = Some("20".into());
        listing.fields.sale_price = Some("80000".into());

        let context = ScoringContext::new(as_of(), &config);
        assert_eq!(score_dimension(&listing, Dimension::Price, &context), None);

        let context = context.with_trade(TradeContext::Sale);
        assert_eq!(
            score_dimension(&listing, Dimension::Price, &context),
            Some(4000.0)
        );
    }

    #[test]
    fn zero_area_blocks_size_and_every_price_context() {
        let config = ScoringConfig::default();
        let mut listing = Listing::new(1, StructuralType::Apartment, "서울 노원구");
        listing.fields.trade_types = vec!["매매".into(), "전세".into(), "월세".into()];
        listing.fields.area = Some("0".into());
        listing.fields.sale_price = Some("50000".into());
        listing.fields.deposit = Some("30000".into());
        listing.fields.monthly_rent = Some("100".into());

        let context = ScoringContext::new(as_of(), &config);
        assert_eq!(score_dimension(&listing, Dimension::Size, &context), None);
        for trade in TradeContext::ALL {
            let context = context.with_trade(trade);
            assert_eq!(score_dimension(&listing, Dimension::Price, &context), None);
        }
    }

    #[test]
    fn other_is_always_computable() {
        let config = ScoringConfig::default();
        let listing = Listing::new(1, StructuralType::Land, "");
        let context = ScoringContext::new(as_of(), &config);
        assert_eq!(
            score_dimension(&listing, Dimension::Other, &context),
            Some(3.0)
        );
    }

    #[test]
    fn for_listing_falls_back_to_primary_trade() {
        let config = ScoringConfig::default();
        let mut listing = Listing::new(1, StructuralType::Apartment, "서울 노원구");
        listing.fields.trade_types = vec!["월세".into(), "전세".into()];

        let context = ScoringContext::new(as_of(), &config);
        assert_eq!(context.for_listing(&listing).trade, Some(TradeContext::Jeonse));

        let explicit = context.with_trade(TradeContext::Sale).for_listing(&listing);
        assert_eq!(explicit.trade, Some(TradeContext::Sale));

        let untraded = Listing::new(2, StructuralType::Land, "");
        assert_eq!(context.for_listing(&untraded).trade, None);
    }
}
