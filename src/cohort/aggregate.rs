//! Cohort statistics per dimension.

use serde::{Deserialize, Serialize};

use crate::core::{Dimension, Listing};
use crate::scoring::{round_to_tenth, score_dimension, ScoringContext};

/// Average, range and size of a cohort's raw scores on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohortStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl CohortStats {
    /// Stats over a non-empty list of raw values with a plain mean.
    ///
    /// Values are summed in sorted order so the mean does not depend on the
    /// order the population was supplied in.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();

        Some(Self {
            average: sum / count as f64,
            min: sorted[0],
            max: sorted[count - 1],
            count,
        })
    }

    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Aggregate the raw scores of a cohort on one dimension.
///
/// Members without a computable, nonzero score are skipped; `None` when
/// nothing survives. The average is rounded to a whole unit for price and to
/// one decimal for condition. Freshness publishes the configured policy
/// average instead of the observed mean.
pub fn aggregate(
    cohort: &[&Listing],
    dimension: Dimension,
    context: &ScoringContext<'_>,
) -> Option<CohortStats> {
    let values: Vec<f64> = cohort
        .iter()
        .filter_map(|listing| score_dimension(listing, dimension, context))
        .filter(|score| *score != 0.0)
        .collect();

    let mut stats = CohortStats::from_values(&values)?;
    stats.average = match dimension {
        Dimension::Price => stats.average.round(),
        Dimension::Condition => round_to_tenth(stats.average),
        Dimension::Freshness => context.config.freshness_average,
        Dimension::Size | Dimension::Other => stats.average,
    };

    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::core::{StructuralType, TradeContext};
    use chrono::{NaiveDate, NaiveDateTime};

    fn as_of() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn priced(id: i64, sale_price: &str, area: &str) -> Listing {
        let mut listing = Listing::new(id, StructuralType::Office, "서울 중구");
        listing.on_market = true;
        listing.fields.trade_types = vec!["매매".into()];
        listing.fields.sale_price = Some(sale_price.into());
        listing.fields.area = Some(area.into());
        listing
    }

    #[test]
    fn empty_cohort_has_no_stats() {
        let config = ScoringConfig::default();
        let context = ScoringContext::new(as_of(), &config);
        assert_eq!(aggregate(&[], Dimension::Size, &context), None);
    }

    #[test]
    fn price_average_is_rounded_to_whole_units() {
        let config = ScoringConfig::default();
        let context = ScoringContext::new(as_of(), &config).with_trade(TradeContext::Sale);
        let listings = [priced(1, "10000", "10"), priced(2, "10000", "10"), priced(3, "10010", "10")];
        let cohort: Vec<&Listing> = listings.iter().collect();

        let stats = aggregate(&cohort, Dimension::Price, &context).unwrap();
        // (1000 + 1000 + 1001) / 3 = 1000.33
        assert_eq!(stats.average, 1000.0);
        assert_eq!(stats.min, 1000.0);
        assert_eq!(stats.max, 1001.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn condition_average_is_rounded_to_one_decimal() {
        let config = ScoringConfig::default();
        let context = ScoringContext::new(as_of(), &config);
        let listings: Vec<Listing> = ["4", "4", "5"]
            .iter()
            .enumerate()
            .map(|(i, rating)| {
                let mut listing = priced(i as i64, "1", "1");
                listing.fields.rating = Some(rating.to_string());
                listing
            })
            .collect();
        let cohort: Vec<&Listing> = listings.iter().collect();

        let stats = aggregate(&cohort, Dimension::Condition, &context).unwrap();
        assert_eq!(stats.average, 4.3);
        assert_eq!((stats.min, stats.max), (4.0, 5.0));
    }

    #[test]
    fn freshness_average_is_policy_constant() {
        let config = ScoringConfig::default();
        let context = ScoringContext::new(as_of(), &config);
        let mut listing = priced(1, "1", "1");
        listing.fields.updated_at = Some("2024-04-30".into());

        let stats = aggregate(&[&listing], Dimension::Freshness, &context).unwrap();
        assert_eq!(stats.average, 5.0);
        assert_eq!(stats.min, 9.8);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn non_computable_members_are_skipped() {
        let config = ScoringConfig::default();
        let context = ScoringContext::new(as_of(), &config);
        let with_area = priced(1, "1", "50");
        let without_area = priced(2, "1", "");

        let stats = aggregate(&[&with_area, &without_area], Dimension::Size, &context).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average, 50.0);

        assert_eq!(aggregate(&[&without_area], Dimension::Size, &context), None);
    }

    #[test]
    fn from_values_is_order_independent() {
        let forward = CohortStats::from_values(&[0.1, 0.2, 0.3, 1e9]).unwrap();
        let backward = CohortStats::from_values(&[1e9, 0.3, 0.2, 0.1]).unwrap();
        assert_eq!(forward, backward);
    }
}
