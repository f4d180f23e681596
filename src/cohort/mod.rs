//! Peer cohorts and their statistics.

pub mod aggregate;
pub mod cache;
pub mod selector;

pub use aggregate::{aggregate, CohortStats};
pub use cache::{CacheStats, CohortKey, CohortStatsCache};
pub use selector::select_cohort;

use crate::core::{Dimension, Listing};
use crate::scoring::ScoringContext;
use tracing::debug;

/// Select the cohort of `focal` and aggregate it in one step.
pub fn cohort_stats(
    focal: &Listing,
    population: &[Listing],
    dimension: Dimension,
    context: &ScoringContext<'_>,
) -> Option<CohortStats> {
    let cohort = select_cohort(focal, population, dimension, context);
    debug!(
        focal = focal.id,
        %dimension,
        peers = cohort.len(),
        "selected cohort"
    );
    aggregate(&cohort, dimension, context)
}
