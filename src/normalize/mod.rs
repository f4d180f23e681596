//! Projection of raw dimension scores onto the shared 0-10 radar scale.
//!
//! The five dimensions measure incompatible things, so each gets a rule:
//!
//! | Dimension | Rule | Formula |
//! |-----------|------|---------|
//! | Price     | inverted linear | `(max - raw) / (max - min) * 10`, 5.0 when `max == min` |
//! | Size      | direct, zero-anchored | `raw / max * 10`, 0 when `max == 0` |
//! | Condition | fixed affine | `raw * 2` |
//! | Freshness | pass-through | capped at 10 |
//! | Other     | pass-through | clamped to [0, 10] |
//!
//! Price and size need cohort stats; without them the raw value is returned
//! unchanged because no meaningful projection exists. Every computed result
//! is clamped to [0, 10] and rounded to one decimal. A cohort average is
//! normalized with the same rule and stats as the raw value it is compared
//! against.

pub mod scale;

pub use scale::{DisplayScore, SCALE_MAX, SCALE_MIDPOINT, SCALE_MIN};

use crate::cohort::CohortStats;
use crate::core::Dimension;
use serde::{Deserialize, Serialize};

/// How a raw value maps onto the display scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Lower raw values are better; anchored to the cohort range.
    Inverted,
    /// Higher raw values are better; anchored to zero and the cohort maximum.
    Direct,
    /// Fixed multiplication, independent of the cohort.
    Affine,
    /// Raw value is already on the display scale.
    Passthrough,
}

/// Normalization rule of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationRule {
    pub direction: Direction,
    /// Multiplier for [`Direction::Affine`].
    pub affine_factor: f64,
    /// Upper cap applied before clamping to the display scale.
    pub ceiling: f64,
}

impl NormalizationRule {
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            affine_factor: 1.0,
            ceiling: SCALE_MAX,
        }
    }

    pub const fn affine(factor: f64) -> Self {
        Self {
            direction: Direction::Affine,
            affine_factor: factor,
            ceiling: SCALE_MAX,
        }
    }

    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Price => Self::new(Direction::Inverted),
            Dimension::Size => Self::new(Direction::Direct),
            // 1 star maps to 2.0, 5 stars to 10.0
            Dimension::Condition => Self::affine(2.0),
            Dimension::Freshness | Dimension::Other => Self::new(Direction::Passthrough),
        }
    }

    /// Whether the rule needs cohort stats to produce a display value.
    pub fn needs_cohort(&self) -> bool {
        matches!(self.direction, Direction::Inverted | Direction::Direct)
    }

    /// Map a raw value onto the display scale.
    pub fn apply(&self, raw: f64, stats: Option<&CohortStats>) -> f64 {
        let projected = match self.direction {
            Direction::Inverted => {
                let Some(stats) = stats else {
                    return raw;
                };
                let spread = stats.spread();
                if spread == 0.0 {
                    SCALE_MIDPOINT
                } else {
                    (stats.max - raw) / spread * SCALE_MAX
                }
            }
            Direction::Direct => {
                let Some(stats) = stats else {
                    return raw;
                };
                if stats.max == 0.0 {
                    SCALE_MIN
                } else {
                    raw / stats.max * SCALE_MAX
                }
            }
            Direction::Affine => raw * self.affine_factor,
            Direction::Passthrough => raw,
        };

        DisplayScore::new(projected.min(self.ceiling)).value()
    }
}

/// Normalize a raw value of `dimension` against its cohort stats.
pub fn normalize(dimension: Dimension, raw: f64, stats: Option<&CohortStats>) -> f64 {
    NormalizationRule::for_dimension(dimension).apply(raw, stats)
}

pub fn normalize_price(raw: f64, stats: Option<&CohortStats>) -> f64 {
    normalize(Dimension::Price, raw, stats)
}

pub fn normalize_size(raw: f64, stats: Option<&CohortStats>) -> f64 {
    normalize(Dimension::Size, raw, stats)
}

pub fn normalize_condition(raw: f64) -> f64 {
    normalize(Dimension::Condition, raw, None)
}

pub fn normalize_freshness(raw: f64) -> f64 {
    normalize(Dimension::Freshness, raw, None)
}

pub fn normalize_other(raw: f64) -> f64 {
    normalize(Dimension::Other, raw, None)
}
