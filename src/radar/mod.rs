//! Radar chart assembly.
//!
//! Runs score, select, aggregate and normalize for each of the five
//! dimensions of one focal listing. The population is passed on every call
//! and never retained; [`RadarReport`] is the full output contract handed to
//! the presentation layer.

use chrono::NaiveDateTime;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::cohort::{cohort_stats, CohortStats, CohortStatsCache};
use crate::core::{Dimension, Listing, TradeContext};
use crate::errors::{Error, Result};
use crate::normalize::normalize;
use crate::scoring::{score_dimension, ScoringContext};

/// One axis of the radar chart. Every element is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionReport {
    pub dimension: Dimension,
    /// Raw score of the focal listing.
    pub raw_focal: Option<f64>,
    /// Cohort average on the raw scale.
    pub raw_average: Option<f64>,
    pub normalized_focal: Option<f64>,
    pub normalized_average: Option<f64>,
    pub stats: Option<CohortStats>,
}

impl DimensionReport {
    /// Build the report from a focal raw score and its cohort stats.
    ///
    /// The average is normalized with the same rule and stats as the focal
    /// value so both points are comparable on the chart.
    pub fn from_parts(
        dimension: Dimension,
        raw_focal: Option<f64>,
        stats: Option<CohortStats>,
    ) -> Self {
        let raw_average = stats.map(|s| s.average);
        Self {
            dimension,
            raw_focal,
            raw_average,
            normalized_focal: raw_focal.map(|raw| normalize(dimension, raw, stats.as_ref())),
            normalized_average: raw_average.map(|avg| normalize(dimension, avg, stats.as_ref())),
            stats,
        }
    }
}

/// Radar chart data of one focal listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarReport {
    pub focal_id: i64,
    pub trade: Option<TradeContext>,
    pub as_of: NaiveDateTime,
    pub dimensions: Vec<DimensionReport>,
}

impl RadarReport {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionReport> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    pub fn normalized_focal(&self, dimension: Dimension) -> Option<f64> {
        self.dimension(dimension).and_then(|d| d.normalized_focal)
    }

    /// Number of axes with a plottable focal point.
    pub fn plotted_axes(&self) -> usize {
        self.dimensions
            .iter()
            .filter(|d| d.normalized_focal.is_some())
            .count()
    }
}

/// Radar report of `focal` against `population`.
pub fn compute_radar(
    focal: &Listing,
    population: &[Listing],
    context: &ScoringContext<'_>,
) -> RadarReport {
    assemble(focal, context, |dimension| {
        cohort_stats(focal, population, dimension, context)
    })
}

/// Like [`compute_radar`], reusing cohort stats from `cache`.
///
/// `population_version` identifies the snapshot; bump it whenever
/// `population` changes.
pub fn compute_radar_cached(
    focal: &Listing,
    population: &[Listing],
    population_version: u64,
    context: &ScoringContext<'_>,
    cache: &CohortStatsCache,
) -> RadarReport {
    assemble(focal, context, |dimension| {
        cache.get_or_compute(focal, population, population_version, dimension, context)
    })
}

fn assemble(
    focal: &Listing,
    context: &ScoringContext<'_>,
    stats_for: impl Fn(Dimension) -> Option<CohortStats>,
) -> RadarReport {
    let dimensions = Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let raw = score_dimension(focal, dimension, context);
            DimensionReport::from_parts(dimension, raw, stats_for(dimension))
        })
        .collect();

    RadarReport {
        focal_id: focal.id,
        trade: context.trade,
        as_of: context.as_of,
        dimensions,
    }
}

/// Score every listing of a snapshot against the snapshot itself, in
/// parallel.
///
/// Listings are priced under `context.trade` when set, otherwise under
/// their own primary trade context. Reports keep population order.
pub fn score_population(
    population: &[Listing],
    population_version: u64,
    context: &ScoringContext<'_>,
    cache: &CohortStatsCache,
) -> Vec<RadarReport> {
    let reports: Vec<RadarReport> = population
        .par_iter()
        .map(|focal| {
            let context = context.for_listing(focal);
            compute_radar_cached(focal, population, population_version, &context, cache)
        })
        .collect();

    debug!(
        listings = reports.len(),
        cache = ?cache.stats(),
        "scored population"
    );
    reports
}

/// Look a focal listing up by id.
pub fn find_focal(population: &[Listing], id: i64) -> Result<&Listing> {
    population
        .iter()
        .find(|listing| listing.id == id)
        .ok_or(Error::FocalNotFound(id))
}
