// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod cohort;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod normalize;
pub mod observability;
pub mod parsing;
pub mod radar;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Dimension, Listing, ListingFields, StructuralType, TradeContext, TypeGroup};

pub use crate::errors::{Error, Result};

pub use crate::cohort::{
    aggregate, cohort_stats, select_cohort, CacheStats, CohortKey, CohortStats, CohortStatsCache,
};

pub use crate::normalize::{
    normalize, normalize_condition, normalize_freshness, normalize_other, normalize_price,
    normalize_size, DisplayScore, NormalizationRule,
};

pub use crate::radar::{
    compute_radar, compute_radar_cached, score_population, DimensionReport, RadarReport,
};

pub use crate::scoring::{score_dimension, ScoringContext};

pub use crate::config::{CohortmapConfig, ScoringConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::{load_population, PopulationSnapshot};
