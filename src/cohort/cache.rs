//! Memoized cohort statistics.
//!
//! Selecting and aggregating a cohort scans the whole population, once per
//! dimension. When the same listing is rendered repeatedly against an
//! unchanged population the result can be reused. The caller owns the
//! population version and must bump it whenever the snapshot changes.
//!
//! Thread-safe, lock-free caching with DashMap so batch scoring on rayon
//! workers can share one cache.

use chrono::NaiveDateTime;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

use super::{cohort_stats, CohortStats};
use crate::core::{Dimension, Listing, TradeContext};
use crate::scoring::ScoringContext;

/// Identity of one cohort computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CohortKey {
    pub focal_id: i64,
    pub population_version: u64,
    pub dimension: Dimension,
    pub trade: Option<TradeContext>,
    /// Freshness depends on the reference instant.
    pub as_of: NaiveDateTime,
}

impl CohortKey {
    pub fn new(
        focal: &Listing,
        population_version: u64,
        dimension: Dimension,
        context: &ScoringContext<'_>,
    ) -> Self {
        Self {
            focal_id: focal.id,
            population_version,
            dimension,
            trade: context.trade,
            as_of: context.as_of,
        }
    }
}

/// Hit and miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Cache of cohort statistics keyed by [`CohortKey`].
///
/// Entries assume one scoring configuration; use a separate cache per
/// configuration.
#[derive(Debug, Default)]
pub struct CohortStatsCache {
    entries: DashMap<CohortKey, Option<CohortStats>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CohortStatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached stats for `focal`, computing them on first request.
    pub fn get_or_compute(
        &self,
        focal: &Listing,
        population: &[Listing],
        population_version: u64,
        dimension: Dimension,
        context: &ScoringContext<'_>,
    ) -> Option<CohortStats> {
        let key = CohortKey::new(focal, population_version, dimension, context);

        if let Some(cached) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(focal = focal.id, %dimension, "cohort stats cache hit");
            return *cached;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let stats = cohort_stats(focal, population, dimension, context);
        self.entries.insert(key, stats);
        stats
    }

    /// Drop entries computed against populations older than `version`.
    pub fn invalidate_before(&self, version: u64) {
        self.entries
            .retain(|key, _| key.population_version >= version);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
