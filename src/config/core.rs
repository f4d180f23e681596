use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;

/// Root configuration structure for cohortmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CohortmapConfig {
    /// Scoring constants configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given ("terminal" or "json")
    pub default_format: Option<String>,
}

impl CohortmapConfig {
    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }
}
