pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

use crate::core::Listing;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io_with_path(e, path))
}

/// Listings the engine scores against, with the version the caller uses to
/// key cached cohort stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    #[serde(default = "default_version")]
    pub version: u64,
    pub listings: Vec<Listing>,
}

fn default_version() -> u64 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Bare(Vec<Listing>),
    Versioned(PopulationSnapshot),
}

impl PopulationSnapshot {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            version: default_version(),
            listings,
        }
    }

    /// Parse either a bare JSON array of listings or a
    /// `{ "version": .., "listings": [..] }` object.
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot = match serde_json::from_str::<SnapshotFile>(content) {
            Ok(SnapshotFile::Versioned(snapshot)) => snapshot,
            Ok(SnapshotFile::Bare(listings)) => Self::new(listings),
            // Untagged errors are opaque; re-parse as an array for a useful
            // line and column.
            Err(_) => Self::new(serde_json::from_str::<Vec<Listing>>(content)?),
        };
        Ok(snapshot)
    }
}

/// Read a population snapshot file.
pub fn load_population(path: &Path) -> Result<PopulationSnapshot> {
    let content = read_file(path)?;
    let snapshot = PopulationSnapshot::from_json(&content)?;
    debug!(
        path = %path.display(),
        version = snapshot.version,
        listings = snapshot.listings.len(),
        "loaded population"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StructuralType;
    use indoc::indoc;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn bare_array_gets_default_version() {
        let snapshot = PopulationSnapshot::from_json(indoc! {r#"
            [
              { "id": 1, "structural_type": "아파트", "address": "서울 노원구" },
              { "id": 2, "structural_type": "토지" }
            ]
        "#})
        .unwrap();

        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.listings.len(), 2);
        assert_eq!(snapshot.listings[1].structural_type, StructuralType::Land);
    }

    #[test]
    fn versioned_object_keeps_version() {
        let snapshot = PopulationSnapshot::from_json(indoc! {r#"
            {
              "version": 17,
              "listings": [{ "id": 5, "structural_type": "office", "on_market": true }]
            }
        "#})
        .unwrap();

        assert_eq!(snapshot.version, 17);
        assert!(snapshot.listings[0].on_market);
    }

    #[test]
    fn malformed_snapshot_is_a_json_error() {
        let err = PopulationSnapshot::from_json("[{ \"id\": \"x\" }]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn load_population_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": 3, "structural_type": "상가" }}]"#).unwrap();

        let snapshot = load_population(file.path()).unwrap();
        assert_eq!(snapshot.listings[0].id, 3);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_population(Path::new("/nonexistent/listings.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/listings.json"));
    }
}
