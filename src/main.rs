use anyhow::Result;
use clap::Parser;
use cohortmap::cli::{Cli, Commands};
use cohortmap::commands::{batch, init, radar};
use cohortmap::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Radar {
            population,
            focal,
            trade,
            as_of,
            format,
            output,
        } => radar::run_radar(radar::RadarConfig {
            population,
            focal,
            trade,
            as_of,
            format,
            output,
            config: cli.config,
        }),
        Commands::Batch {
            population,
            trade,
            as_of,
            format,
            output,
            jobs,
        } => batch::run_batch(batch::BatchConfig {
            population,
            trade,
            as_of,
            format,
            output,
            jobs,
            config: cli.config,
        }),
        Commands::Init { force } => init::init_config(force),
    }
}
