//! `klakie_report`: prints the invoice aggregate for one pay period as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use clap::Parser;
use klakie_config::ConfigManager;
use klakie_domain::{PeriodKind, RawEntry};
use serde::Deserialize;

use crate::{
    entries::{parse_entries, DetailedReport, RawRecord},
    errors::{EngineError, Result},
    invoice::InvoiceAggregateBuilder,
    pay_period,
    time::{Clock, SystemClock},
};

#[derive(Debug, Parser)]
#[command(
    name = "klakie_report",
    version,
    about = "Aggregate time entries into an invoice payload"
)]
pub struct Args {
    /// JSON file holding a detailed report or an array of raw records.
    pub entries: PathBuf,

    /// Invoice configuration file. Defaults to the user configuration location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Billing cadence: `weekly` or `semi-monthly`.
    #[arg(long, default_value = "weekly")]
    pub kind: String,

    /// Reference date (YYYY-MM-DD). Defaults to today in UTC.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Periods to move from the reference period; negative moves backwards.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub steps: i32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntriesFile {
    Report(DetailedReport),
    Records(Vec<RawRecord>),
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();
    let output = run(&args, &SystemClock)?;
    println!("{output}");
    Ok(())
}

/// Executes one report request and returns the pretty-printed aggregate.
pub fn run(args: &Args, clock: &dyn Clock) -> Result<String> {
    let kind: PeriodKind = args.kind.parse()?;
    let manager = match &args.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location(),
    };
    let config = manager.load()?;
    config.validate()?;

    let records = read_records(&args.entries)?;
    let entries = parse_entries(&records)?;

    let reference = args.date.unwrap_or_else(|| clock.today());
    let base = pay_period::containing(kind, reference);
    if !base.contains_date(reference) {
        tracing::warn!(
            %reference,
            first_day = %base.first_day(),
            last_day = %base.last_day(),
            "reference date falls outside its resolved period"
        );
    }
    let period = pay_period::step(&base, args.steps);
    let scoped: Vec<RawEntry> = entries
        .into_iter()
        .filter(|entry| period.contains_date(entry.date_key()))
        .collect();
    tracing::info!(
        period = %pay_period::label(&period),
        entries = scoped.len(),
        "building report"
    );

    let aggregate = InvoiceAggregateBuilder::build_for_config(&scoped, &config, &period);
    Ok(serde_json::to_string_pretty(&aggregate)?)
}

fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let data = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&data)?;
    let file = EntriesFile::deserialize(value).map_err(|_| {
        EngineError::InvalidInput(format!(
            "{}: expected a detailed report with `timeentries` or an array of entry records",
            path.display()
        ))
    })?;
    let records = match file {
        EntriesFile::Report(report) => report.into_records(),
        EntriesFile::Records(records) => records,
    };
    Ok(records)
}
