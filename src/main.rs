//! Metric Events - Binary Entry Point
//!
//! Reads an events CSV from a file or stdin and prints per-metric events.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use metric_events::cli::{run, Cli};
use metric_events::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level).map_err(|e| anyhow::anyhow!("failed to set up logging: {}", e))?;

    let stdout = io::stdout().lock();
    match &cli.input {
        Some(path) if !cli.reads_stdin() => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(&cli, BufReader::new(file), stdout)?;
        }
        _ => {
            run(&cli, io::stdin().lock(), stdout)?;
        }
    }

    Ok(())
}
