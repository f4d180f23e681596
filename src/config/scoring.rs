//! Scoring configuration for the five radar dimensions
//!
//! This module contains the tunable constants of the dimension scorers:
//! - Deposit annuitization rate for lease prices
//! - Monetary base-unit scale
//! - Freshness decay and the policy average
//! - Amenity bonus weights for the "other" dimension

use serde::{Deserialize, Serialize};

/// Scoring constants configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Nominal annual rate used to turn a deposit into a carrying cost
    #[serde(default = "default_jeonse_annual_rate")]
    pub jeonse_annual_rate: f64,

    /// Multiplier converting entered money fields into the base unit
    #[serde(default = "default_money_scale")]
    pub money_scale: f64,

    /// Freshness points lost per day since the last update
    #[serde(default = "default_freshness_decay_per_day")]
    pub freshness_decay_per_day: f64,

    /// Freshness of a listing updated today
    #[serde(default = "default_freshness_ceiling")]
    pub freshness_ceiling: f64,

    /// Published cohort average for freshness
    #[serde(default = "default_freshness_average")]
    pub freshness_average: f64,

    #[serde(default)]
    pub amenities: AmenityWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            jeonse_annual_rate: default_jeonse_annual_rate(),
            money_scale: default_money_scale(),
            freshness_decay_per_day: default_freshness_decay_per_day(),
            freshness_ceiling: default_freshness_ceiling(),
            freshness_average: default_freshness_average(),
            amenities: AmenityWeights::default(),
        }
    }
}

impl ScoringConfig {
    // Pure function: Check a value is finite and non-negative
    pub fn validate_non_negative(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a non-negative number", name))
        }
    }

    // Pure function: Check a value is finite and strictly positive
    pub fn validate_positive(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be greater than 0", name))
        }
    }

    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        let mut validations = vec![
            Self::validate_non_negative(self.jeonse_annual_rate, "jeonse_annual_rate"),
            Self::validate_positive(self.money_scale, "money_scale"),
            Self::validate_positive(self.freshness_decay_per_day, "freshness_decay_per_day"),
            Self::validate_positive(self.freshness_ceiling, "freshness_ceiling"),
            Self::validate_non_negative(self.freshness_average, "freshness_average"),
        ];
        validations.extend(self.amenities.collect_validations());
        validations
    }

    /// Validate all scoring constants, stopping at the first problem
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_validations() {
            validation?;
        }
        Ok(())
    }
}

/// Bonus weights for the "other amenities" dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityWeights {
    #[serde(default = "default_amenity_base")]
    pub base: f64,

    /// South, south-east or south-west facing
    #[serde(default = "default_flat_bonus")]
    pub south_facing: f64,

    #[serde(default = "default_flat_bonus")]
    pub parking: f64,

    /// Flat bonus for an elevator in the amenity list
    #[serde(default = "default_flat_bonus")]
    pub elevator: f64,

    #[serde(default = "default_flat_bonus")]
    pub pets: f64,

    /// Per entry of the security checklist
    #[serde(default = "default_security_item_bonus")]
    pub security_item: f64,

    /// Per entry of the general amenity checklist
    #[serde(default = "default_amenity_item_bonus")]
    pub amenity_item: f64,

    #[serde(default = "default_amenity_ceiling")]
    pub ceiling: f64,
}

impl Default for AmenityWeights {
    fn default() -> Self {
        Self {
            base: default_amenity_base(),
            south_facing: default_flat_bonus(),
            parking: default_flat_bonus(),
            elevator: default_flat_bonus(),
            pets: default_flat_bonus(),
            security_item: default_security_item_bonus(),
            amenity_item: default_amenity_item_bonus(),
            ceiling: default_amenity_ceiling(),
        }
    }
}

impl AmenityWeights {
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            ScoringConfig::validate_non_negative(self.base, "amenities.base"),
            ScoringConfig::validate_non_negative(self.south_facing, "amenities.south_facing"),
            ScoringConfig::validate_non_negative(self.parking, "amenities.parking"),
            ScoringConfig::validate_non_negative(self.elevator, "amenities.elevator"),
            ScoringConfig::validate_non_negative(self.pets, "amenities.pets"),
            ScoringConfig::validate_non_negative(self.security_item, "amenities.security_item"),
            ScoringConfig::validate_non_negative(self.amenity_item, "amenities.amenity_item"),
            ScoringConfig::validate_positive(self.ceiling, "amenities.ceiling"),
        ]
    }
}

pub fn default_jeonse_annual_rate() -> f64 {
    0.03 // 3% nominal annual rate
}
pub fn default_money_scale() -> f64 {
    1.0 // fields are entered in the base unit (만원)
}
pub fn default_freshness_decay_per_day() -> f64 {
    0.2
}
pub fn default_freshness_ceiling() -> f64 {
    10.0
}
pub fn default_freshness_average() -> f64 {
    5.0
}
pub fn default_amenity_base() -> f64 {
    3.0
}
pub fn default_flat_bonus() -> f64 {
    1.0
}
pub fn default_security_item_bonus() -> f64 {
    0.2
}
pub fn default_amenity_item_bonus() -> f64 {
    0.5
}
pub fn default_amenity_ceiling() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_rate_is_rejected() {
        let config = ScoringConfig {
            jeonse_annual_rate: -0.01,
            ..ScoringConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("jeonse_annual_rate"));
    }

    #[test]
    fn zero_ceiling_is_rejected() {
        let mut config = ScoringConfig::default();
        config.amenities.ceiling = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ScoringConfig = toml::from_str(
            r#"
            jeonse_annual_rate = 0.045
            [amenities]
            parking = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.jeonse_annual_rate, 0.045);
        assert_eq!(config.freshness_average, 5.0);
        assert_eq!(config.amenities.parking, 0.5);
        assert_eq!(config.amenities.elevator, 1.0);
    }
}
