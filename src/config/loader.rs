use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::CohortmapConfig;
use super::scoring::ScoringConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the working directory and
/// its ancestors.
pub const CONFIG_FILE_NAME: &str = ".cohortmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read and parse config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, replacing invalid scoring constants with
/// defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<CohortmapConfig> {
    let mut config = toml::from_str::<CohortmapConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if let Err(e) = config.scoring.validate() {
        warn!("Invalid scoring configuration: {}. Using defaults.", e);
        config.scoring = ScoringConfig::default();
    }

    Ok(config)
}

/// Load configuration from an explicit path; unlike discovery, a missing or
/// malformed file is an error.
pub fn load_config_from_path(path: &Path) -> Result<CohortmapConfig> {
    let contents =
        read_config_file(path).map_err(|e| Error::io_with_path(e, path.to_path_buf()))?;
    let config = parse_and_validate_config(&contents)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a candidate path found during discovery
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CohortmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a configuration file.
pub fn discover_config(start: PathBuf) -> CohortmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CohortmapConfig::default()
        })
}

/// Load configuration starting from the current directory.
pub fn load_config() -> CohortmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CohortmapConfig::default()
        }
    }
}

/// Default configuration file contents written by `cohortmap init`.
pub fn default_config_toml() -> &'static str {
    r#"# Cohortmap Configuration

[scoring]
# Annual rate used to turn a lease deposit into a monthly carrying cost
jeonse_annual_rate = 0.03
# Multiplier converting entered money fields into the base unit
money_scale = 1.0
freshness_decay_per_day = 0.2
freshness_ceiling = 10.0
# Published cohort average for the freshness axis
freshness_average = 5.0

[scoring.amenities]
base = 3.0
south_facing = 1.0
parking = 1.0
elevator = 1.0
pets = 1.0
security_item = 0.2
amenity_item = 0.5
ceiling = 10.0

[output]
default_format = "terminal"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn default_config_file_round_trips_to_defaults() {
        let config = parse_and_validate_config(default_config_toml()).unwrap();
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.default_format(), Some("terminal"));
    }

    #[test]
    fn invalid_scoring_falls_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [scoring]
            money_scale = 0.0
            jeonse_annual_rate = 0.05
        "#})
        .unwrap();

        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = parse_and_validate_config("[scoring\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn discover_config_finds_file_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("listings").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[scoring]\njeonse_annual_rate = 0.04\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.scoring.jeonse_annual_rate, 0.04);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
