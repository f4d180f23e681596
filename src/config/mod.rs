// Sub-modules
mod core;
mod loader;
mod scoring;

// Re-export scoring types
pub use scoring::{
    default_amenity_base, default_amenity_ceiling, default_amenity_item_bonus,
    default_flat_bonus, default_freshness_average, default_freshness_ceiling,
    default_freshness_decay_per_day, default_jeonse_annual_rate, default_money_scale,
    default_security_item_bonus, AmenityWeights, ScoringConfig,
};

// Re-export core types
pub use self::core::{CohortmapConfig, OutputConfig};

// Re-export loader functions
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config,
    load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME,
};
