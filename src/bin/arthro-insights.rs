// ABOUTME: Command-line entry point that analyzes journal exports and prints the report
// ABOUTME: Reads records and medication logs from JSON files, writes the life-pattern report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Life-pattern analysis for arthritis journal exports.
//!
//! Usage:
//! ```bash
//! # Analyze records as of today
//! cargo run --bin arthro-insights -- --records records.json
//!
//! # Include medication logs and pin the analysis date
//! cargo run --bin arthro-insights -- --records records.json \
//!     --medications medications.json --as-of 2025-06-30 --pretty
//!
//! # JSON logs on stderr
//! LOG_FORMAT=json cargo run --bin arthro-insights -- --records records.json
//! ```

use anyhow::{Context, Result};
use arthro_insights::logging::LoggingConfig;
use arthro_insights::{journal, AnalysisConfig, LifePatternAnalyzer};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "arthro-insights",
    about = "Arthritis journal life-pattern analysis",
    long_about = "Find correlations, weekly patterns, monthly trends, and symptom triggers in an arthritis health journal"
)]
struct Args {
    /// JSON file containing an array of daily health records
    #[arg(long)]
    records: PathBuf,

    /// JSON file containing an array of medication log entries
    #[arg(long)]
    medications: Option<PathBuf>,

    /// Analysis date (YYYY-MM-DD); defaults to today in UTC
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging for the analyzers
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let records = journal::read_records(&args.records)
        .with_context(|| format!("Failed to load records from {}", args.records.display()))?;
    let medications = match &args.medications {
        Some(path) => journal::read_medication_logs(path)
            .with_context(|| format!("Failed to load medication logs from {}", path.display()))?,
        None => Vec::new(),
    };
    info!(
        records = records.len(),
        medication_logs = medications.len(),
        "Loaded journal exports"
    );

    let analyzer = LifePatternAnalyzer::new(AnalysisConfig::load_or_default());
    let report = match args.as_of {
        Some(as_of) => analyzer.analyze_as_of(&records, &medications, as_of),
        None => analyzer.analyze(&records, &medications),
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write report")?;
    Ok(())
}
