use crate::core::TradeContext;
use crate::io::OutputFormat as WriterFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cohortmap")]
#[command(about = "Comparable-cohort radar scoring for property listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .cohortmap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one listing against its peers
    Radar {
        /// Population snapshot (JSON)
        population: PathBuf,

        /// Id of the focal listing
        #[arg(long)]
        focal: i64,

        /// Trade context to price under (defaults to the listing's first)
        #[arg(long, value_enum)]
        trade: Option<TradeArg>,

        /// Reference time for freshness (RFC 3339 or YYYY-MM-DD, defaults to now)
        #[arg(long = "as-of")]
        as_of: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score every listing of a snapshot against the snapshot
    Batch {
        /// Population snapshot (JSON)
        population: PathBuf,

        /// Trade context to price under (defaults to each listing's first)
        #[arg(long, value_enum)]
        trade: Option<TradeArg>,

        /// Reference time for freshness (RFC 3339 or YYYY-MM-DD, defaults to now)
        #[arg(long = "as-of")]
        as_of: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for WriterFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => WriterFormat::Json,
            OutputFormat::Terminal => WriterFormat::Terminal,
        }
    }
}

impl OutputFormat {
    /// Parse a `default_format` config value.
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TradeArg {
    Sale,
    Jeonse,
    MonthlyRent,
}

impl From<TradeArg> for TradeContext {
    fn from(arg: TradeArg) -> Self {
        match arg {
            TradeArg::Sale => TradeContext::Sale,
            TradeArg::Jeonse => TradeContext::Jeonse,
            TradeArg::MonthlyRent => TradeContext::MonthlyRent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_radar_command() {
        let cli = Cli::parse_from([
            "cohortmap",
            "radar",
            "listings.json",
            "--focal",
            "42",
            "--trade",
            "monthly-rent",
            "--as-of",
            "2024-05-01",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::Radar {
                population,
                focal,
                trade,
                as_of,
                format,
                output,
            } => {
                assert_eq!(population, PathBuf::from("listings.json"));
                assert_eq!(focal, 42);
                assert_eq!(trade, Some(TradeArg::MonthlyRent));
                assert_eq!(as_of.as_deref(), Some("2024-05-01"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("Expected Radar command"),
        }
    }

    #[test]
    fn test_cli_parsing_batch_command() {
        let cli = Cli::parse_from(["cohortmap", "-vv", "batch", "listings.json", "-j", "4"]);

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Batch { jobs, trade, .. } => {
                assert_eq!(jobs, 4);
                assert!(trade.is_none());
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["cohortmap", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => {
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["cohortmap", "init", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn radar_requires_focal() {
        assert!(Cli::try_parse_from(["cohortmap", "radar", "listings.json"]).is_err());
    }

    #[test]
    fn format_from_config_is_case_insensitive() {
        assert_eq!(OutputFormat::from_config("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("markdown"), None);
    }

    #[test]
    fn trade_arg_maps_to_context() {
        assert_eq!(TradeContext::from(TradeArg::Jeonse), TradeContext::Jeonse);
    }
}
