//! Command-line front end
//!
//! Reads an events CSV, extracts per-metric events, optionally merges them
//! into disjoint intervals and prints the result.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

use crate::extract::{ExtractConfig, Extractor};
use crate::merge::{merge_all, merge_events_cloned, IntervalStats};
use crate::records::{write_events, FILE_HEADER};
use crate::types::EventMap;
use crate::utils::{format_duration_ms, format_millis};

/// Output formats for extracted events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON report
    #[default]
    Json,
    /// Events CSV with header row
    Csv,
    /// Human-readable table
    Table,
}

#[derive(Debug, Parser)]
#[command(
    name = "metric-events",
    version,
    about = "Extract per-metric events from a CSV record stream and merge overlapping intervals"
)]
pub struct Cli {
    /// Input CSV file; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Only extract these metrics (repeat or comma-separate)
    #[arg(
        short,
        long = "metric",
        env = "METRIC_EVENTS_METRICS",
        value_delimiter = ','
    )]
    pub metrics: Vec<String>,

    /// Merge each metric's overlapping events into disjoint intervals
    #[arg(long)]
    pub merge: bool,

    /// Include per-metric interval statistics
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Fail when any record is malformed instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Header row to skip
    #[arg(long, default_value = FILE_HEADER)]
    pub header: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Whether input comes from stdin
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            Some(path) => path.as_os_str() == "-",
            None => true,
        }
    }

    /// Extraction settings selected by the flags
    pub fn extract_config(&self) -> ExtractConfig {
        let config = ExtractConfig::new().with_header(self.header.as_str());
        if self.metrics.is_empty() {
            config
        } else {
            config.with_metrics(self.metrics.iter().cloned())
        }
    }
}

/// Everything the binary prints
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Events, or merged intervals with `--merge`, by metric
    pub events: EventMap,
    /// Statistics over each metric's merged intervals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BTreeMap<String, IntervalStats>>,
    /// One message per skipped record
    pub errors: Vec<String>,
}

/// Run one extraction over `input` and write the report to `out`
pub fn run<R: Read, W: Write>(cli: &Cli, input: R, mut out: W) -> anyhow::Result<Report> {
    let extraction = Extractor::with_config(cli.extract_config())
        .extract_reader(input)
        .context("failed to read events CSV")?;

    for err in &extraction.errors {
        warn!(%err, "skipped record");
    }
    if cli.strict && !extraction.is_clean() {
        bail!("{} malformed record(s)", extraction.errors.len());
    }

    let errors = extraction.error_messages();
    let (mut events, _) = extraction.into_parts();
    let extracted: usize = events.values().map(Vec::len).sum();

    if cli.merge {
        events = merge_all(&mut events);
    }

    let stats = cli.stats.then(|| {
        events
            .iter()
            .map(|(metric, metric_events)| {
                let intervals = merge_events_cloned(metric_events);
                (metric.clone(), IntervalStats::from_intervals(&intervals))
            })
            .collect()
    });

    let report = Report {
        events,
        stats,
        errors,
    };

    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_events(&mut out, &report.events)?,
        OutputFormat::Table => write_table(&mut out, &report)?,
    }
    out.flush()?;

    info!(
        metrics = report.events.len(),
        events = extracted,
        skipped = report.errors.len(),
        merged = cli.merge,
        "done"
    );
    Ok(report)
}

fn write_table<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    for (metric, events) in &report.events {
        writeln!(out, "{} ({} events)", metric, events.len())?;
        for event in events {
            writeln!(
                out,
                "  {}  {}  {:>14}  {}  {}  {}",
                format_millis(event.start),
                format_millis(event.end),
                format_duration_ms(event.duration_ms()),
                event.event_type,
                event.value,
                event.opt
            )?;
        }

        if let Some(stats) = report.stats.as_ref().and_then(|s| s.get(metric)) {
            writeln!(
                out,
                "  covered {} in {} intervals ({:.1}% of span)",
                format_duration_ms(stats.covered_ms),
                stats.intervals,
                stats.coverage_ratio() * 100.0
            )?;
        }
    }
    Ok(())
}
