use super::{load_config, open_output, resolve_as_of, resolve_format};
use crate::cli::{OutputFormat, TradeArg};
use crate::cohort::CohortStatsCache;
use crate::core::TradeContext;
use crate::io::{create_writer, load_population};
use crate::radar::score_population;
use crate::scoring::ScoringContext;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

pub struct BatchConfig {
    pub population: PathBuf,
    pub trade: Option<TradeArg>,
    pub as_of: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub jobs: usize,
    pub config: Option<PathBuf>,
}

pub fn run_batch(config: BatchConfig) -> Result<()> {
    configure_thread_pool(config.jobs);

    let settings = load_config(config.config.as_deref())?;
    let as_of = resolve_as_of(config.as_of.as_deref())?;
    let snapshot = load_population(&config.population)?;

    let mut context = ScoringContext::new(as_of, &settings.scoring);
    if let Some(trade) = config.trade {
        context = context.with_trade(TradeContext::from(trade));
    }

    let cache = CohortStatsCache::new();
    let started = Instant::now();
    let reports = score_population(&snapshot.listings, snapshot.version, &context, &cache);
    let stats = cache.stats();
    info!(
        listings = reports.len(),
        workers = get_worker_count(config.jobs),
        cache_hits = stats.hits,
        cache_misses = stats.misses,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scored population"
    );

    let format = resolve_format(config.format, &settings);
    let mut writer = create_writer(format, open_output(config.output.as_deref())?);
    writer.write_batch(&reports)?;
    writer.flush()?;
    Ok(())
}

/// Configure the rayon global pool once; `0` keeps the default size.
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        warn!("Thread pool already configured: {}", e);
    }
}

pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        rayon::current_num_threads()
    } else {
        jobs
    }
}
