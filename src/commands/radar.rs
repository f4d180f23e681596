use super::{load_config, open_output, resolve_as_of, resolve_format};
use crate::cli::{OutputFormat, TradeArg};
use crate::core::TradeContext;
use crate::io::{create_writer, load_population};
use crate::radar::{compute_radar, find_focal};
use crate::scoring::ScoringContext;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

pub struct RadarConfig {
    pub population: PathBuf,
    pub focal: i64,
    pub trade: Option<TradeArg>,
    pub as_of: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run_radar(config: RadarConfig) -> Result<()> {
    let settings = load_config(config.config.as_deref())?;
    let as_of = resolve_as_of(config.as_of.as_deref())?;
    let snapshot = load_population(&config.population)?;
    let focal = find_focal(&snapshot.listings, config.focal)?;

    let mut context = ScoringContext::new(as_of, &settings.scoring);
    if let Some(trade) = config.trade {
        context = context.with_trade(TradeContext::from(trade));
    }
    let context = context.for_listing(focal);

    let report = compute_radar(focal, &snapshot.listings, &context);
    info!(
        focal = report.focal_id,
        axes = report.plotted_axes(),
        population = snapshot.listings.len(),
        "computed radar"
    );

    let format = resolve_format(config.format, &settings);
    let mut writer = create_writer(format, open_output(config.output.as_deref())?);
    writer.write_radar(&report)?;
    writer.flush()?;
    Ok(())
}
