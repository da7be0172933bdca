//! Command-line front end: reads a JSON list of deliveries, feeds the valid
//! records to a [`SummaryCalculator`] and prints the aggregation report.

mod config;
mod ingest;
mod logging;
mod progress;

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use recipe_stats_core::SummaryCalculator;

pub use config::{Cli, DEFAULT_NAMES, DEFAULT_POSTCODE, DEFAULT_TIME_RANGE};
pub use ingest::{ingest_file, ingest_reader, IngestSummary};
pub use logging::{init_tracing, LOG_ENV};
pub use progress::{ConsoleProgress, NoProgress, Progress, CONSOLE_CLEAR};

/// Run one aggregation as configured by `cli`.
///
/// # Errors
/// Returns an error when the input cannot be read or decoded, or when the
/// report cannot be rendered or written.
pub fn run(cli: &Cli) -> Result<IngestSummary> {
    let started = Instant::now();
    let filter = cli.filter();
    if cli.verbose {
        eprintln!("Input\nFile: {}\nFilter: {filter:?}", cli.filename.display());
    }
    tracing::info!(
        file = %cli.filename.display(),
        postcode = %filter.postcode,
        time_range = %filter.time_range,
        names = ?filter.recipe_names,
        "starting aggregation"
    );

    let mut calculator = SummaryCalculator::new(filter);
    let summary = if cli.verbose {
        let summary =
            ingest_file(&cli.filename, &mut calculator, &mut ConsoleProgress::new(io::stderr()))?;
        eprintln!();
        summary
    } else {
        ingest_file(&cli.filename, &mut calculator, &mut NoProgress)?
    };

    tracing::info!(
        records = summary.records,
        parsed = summary.parsed,
        ignored = summary.ignored,
        "ingestion finished"
    );
    if summary.records > 0 && summary.parsed == 0 {
        tracing::warn!(records = summary.records, "every record was ignored as invalid");
    }

    let report = calculator.aggregate().to_pretty_json().context("failed to render report")?;
    write_report(cli.output.as_deref(), &report)?;

    if cli.verbose {
        eprintln!("{:?}", started.elapsed());
    }
    Ok(summary)
}

fn write_report(output: Option<&Path>, report: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{report}\n"))
            .with_context(|| format!("failed to write report to {}", path.display())),
        None => {
            println!("{report}");
            Ok(())
        }
    }
}
