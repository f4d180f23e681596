use crate::core::Dimension;
use crate::normalize::SCALE_MAX;
use crate::radar::{DimensionReport, RadarReport};
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_radar(&mut self, report: &RadarReport) -> anyhow::Result<()>;

    fn write_batch(&mut self, reports: &[RadarReport]) -> anyhow::Result<()>;

    /// Push buffered output to the sink, surfacing errors a drop would swallow.
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_radar(&mut self, report: &RadarReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_batch(&mut self, reports: &[RadarReport]) -> anyhow::Result<()> {
        self.write_json(reports)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Human-readable radar tables with colored bars.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &RadarReport) -> anyhow::Result<()> {
        let trade = report
            .trade
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| "no trade context".to_string());
        writeln!(
            self.writer,
            "{}",
            format!("Listing {}", report.focal_id).bold().blue()
        )?;
        writeln!(
            self.writer,
            "  {} | as of {}",
            trade,
            report.as_of.format("%Y-%m-%d %H:%M")
        )?;
        Ok(())
    }

    fn write_axis(&mut self, axis: &DimensionReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<10} {:>5} {:>5}  {}  {}",
            axis.dimension.label(),
            format_score(axis.normalized_focal),
            format_score(axis.normalized_average),
            bar(axis.normalized_focal, axis.normalized_average),
            format_peers(axis)
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_radar(&mut self, report: &RadarReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        writeln!(
            self.writer,
            "  {:<10} {:>5} {:>5}",
            "axis".dimmed(),
            "focal".dimmed(),
            "avg".dimmed()
        )?;
        for axis in &report.dimensions {
            self.write_axis(axis)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_batch(&mut self, reports: &[RadarReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Population Radar Summary".bold().blue())?;
        writeln!(self.writer, "{}", "========================".blue())?;
        write!(self.writer, "{:>10}", "listing")?;
        for dimension in Dimension::ALL {
            write!(self.writer, " {:>9}", dimension.label())?;
        }
        writeln!(self.writer)?;

        for report in reports {
            write!(self.writer, "{:>10}", report.focal_id)?;
            for dimension in Dimension::ALL {
                let cell = report
                    .dimension(dimension)
                    .map(|axis| colored_cell(axis.normalized_focal, axis.normalized_average))
                    .unwrap_or_else(|| format!("{:>9}", "-").dimmed().to_string());
                write!(self.writer, " {cell}")?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "  {} listings scored", reports.len())?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{s:.1}"))
}

fn format_peers(axis: &DimensionReport) -> String {
    match axis.stats {
        Some(stats) => format!("{} peers", stats.count).dimmed().to_string(),
        None => "no cohort".dimmed().to_string(),
    }
}

fn colored_cell(focal: Option<f64>, average: Option<f64>) -> String {
    let text = format!("{:>9}", format_score(focal));
    match compare(focal, average) {
        Some(true) => text.green().to_string(),
        Some(false) => text.yellow().to_string(),
        None => text.normal().to_string(),
    }
}

/// Whether the focal value reaches the cohort average.
fn compare(focal: Option<f64>, average: Option<f64>) -> Option<bool> {
    Some(focal? >= average?)
}

/// Ten-cell bar of the focal value; green when at or above the average.
fn bar(focal: Option<f64>, average: Option<f64>) -> String {
    let Some(value) = focal.filter(|v| (0.0..=SCALE_MAX).contains(v)) else {
        return format!("{:10}", "");
    };
    let filled = value.round() as usize;
    let text = format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled));
    match compare(focal, average) {
        Some(true) => text.green().to_string(),
        Some(false) => text.yellow().to_string(),
        None => text,
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
