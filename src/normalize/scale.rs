//! Type-safe display scale for radar chart values.
//!
//! Every axis of the radar chart is drawn on the same 0-10 scale. Encoding
//! that scale in a newtype keeps raw values (money per area, square metres,
//! stars) from being plotted by mistake.
//!
//! # Examples
//!
//! ```rust
//! use cohortmap::normalize::DisplayScore;
//!
//! // Out-of-bounds values are clamped
//! let clamped = DisplayScore::new(12.3);
//! assert_eq!(clamped.value(), 10.0);
//!
//! // Values are kept to one decimal
//! let score = DisplayScore::new(6.94);
//! assert_eq!(score.value(), 6.9);
//! ```

use serde::{Deserialize, Serialize};

/// Lowest value on the display scale.
pub const SCALE_MIN: f64 = 0.0;
/// Highest value on the display scale.
pub const SCALE_MAX: f64 = 10.0;
/// Centre of the scale, used when a cohort has no spread.
pub const SCALE_MIDPOINT: f64 = 5.0;

/// Score on the 0-10 display scale, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DisplayScore(f64);

impl DisplayScore {
    /// Create a new score, clamping to [0.0, 10.0] and rounding to one decimal.
    pub fn new(value: f64) -> Self {
        let clamped = value.clamp(SCALE_MIN, SCALE_MAX);
        Self((clamped * 10.0).round() / 10.0)
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DisplayScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
