pub mod batch;
pub mod init;
pub mod radar;

use crate::cli::OutputFormat;
use crate::config::{self, CohortmapConfig};
use crate::io::OutputFormat as WriterFormat;
use crate::parsing::parse_timestamp;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Explicit `--config` path, or discovery from the working directory.
pub fn load_config(path: Option<&Path>) -> Result<CohortmapConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

/// Parse `--as-of`, defaulting to the current local time.
pub fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDateTime> {
    match as_of {
        Some(raw) => parse_timestamp(raw)
            .with_context(|| format!("Invalid --as-of value: {raw}")),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

/// `--format` wins, then the config default, then terminal.
pub fn resolve_format(format: Option<OutputFormat>, config: &CohortmapConfig) -> WriterFormat {
    format
        .or_else(|| config.default_format().and_then(OutputFormat::from_config))
        .unwrap_or(OutputFormat::Terminal)
        .into()
}

/// Writer for `--output`, or stdout. Colors are disabled for files.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
