//! CLI command for running reports
//!
//! Runs one report or all of them over the loaded dataset and writes the
//! results to the terminal or to files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use log::warn;
use rust_decimal::Decimal;

use crate::config::{NorthwindPaths, Settings};
use crate::error::{NorthwindError, NorthwindResult};
use crate::export::{write_report, ExportFormat};
use crate::history::{RunEntry, RunHistory};
use crate::reports::{ReportKind, ReportOptions, ReportTable};
use crate::storage::Dataset;

/// Selects every report
pub const ALL_REPORTS: &str = "all";

/// Arguments of `northwind report`
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Report to run (see `northwind list`), or "all"
    pub report: String,

    /// Row limit for the ranked reports (top customers, employees, countries, peak month products)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Supplier share threshold in percent
    #[arg(long)]
    pub threshold: Option<Decimal>,

    /// Repeat customers need strictly more orders than this
    #[arg(long)]
    pub min_orders: Option<usize>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to this file; with "all", a directory receiving one file per report
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// The reports selected by the positional argument
    pub fn kinds(&self) -> NorthwindResult<Vec<ReportKind>> {
        if self.report.eq_ignore_ascii_case(ALL_REPORTS) {
            Ok(ReportKind::ALL.to_vec())
        } else {
            Ok(vec![self.report.parse()?])
        }
    }

    /// Configured report defaults with command-line overrides applied
    pub fn options(&self, defaults: &ReportOptions) -> NorthwindResult<ReportOptions> {
        let mut options = defaults.clone();

        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(NorthwindError::Validation(
                    "--limit must be at least 1".into(),
                ));
            }
            options.top_customers = limit;
            options.top_employees = limit;
            options.peak_month_products = limit;
            options.top_countries = limit;
        }

        if let Some(threshold) = self.threshold {
            if threshold.is_sign_negative() || threshold > Decimal::ONE_HUNDRED {
                return Err(NorthwindError::Validation(format!(
                    "--threshold must be between 0 and 100, got {}",
                    threshold
                )));
            }
            options.supplier_share_threshold = threshold;
        }

        if let Some(min_orders) = self.min_orders {
            options.repeat_customer_min_orders = min_orders;
        }

        Ok(options)
    }
}

/// Handle `northwind report`
pub fn handle_report_command(
    paths: &NorthwindPaths,
    settings: &Settings,
    dataset_path: &Path,
    args: ReportArgs,
) -> NorthwindResult<()> {
    let kinds = args.kinds()?;
    let options = args.options(&settings.reports)?;
    let format = args.format.unwrap_or(settings.default_format);
    let dataset = Dataset::load(dataset_path)?;
    let history = RunHistory::new(paths.history_log());
    let run_all = kinds.len() > 1;

    if let (true, Some(dir)) = (run_all, &args.output) {
        fs::create_dir_all(dir).map_err(|e| {
            NorthwindError::Export(format!(
                "Failed to create output directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }

    for (index, kind) in kinds.into_iter().enumerate() {
        let started = Instant::now();
        let table = kind.generate(&dataset, &options)?;
        record_run(&history, &table, dataset_path, started);

        match &args.output {
            Some(dir) if run_all => {
                let path = dir.join(format!("{}.{}", kind.name(), format.extension()));
                write_to_file(&table, format, &settings.currency_symbol, &path)?;
            }
            Some(path) => {
                write_to_file(&table, format, &settings.currency_symbol, path)?;
                println!("{} report exported to: {}", kind.title(), path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                if index > 0 && format == ExportFormat::Table {
                    writeln!(out)?;
                }
                write_report(&table, format, &settings.currency_symbol, &mut out)?;
            }
        }
    }

    if let (true, Some(dir)) = (run_all, &args.output) {
        println!(
            "{} reports exported to: {}",
            ReportKind::ALL.len(),
            dir.display()
        );
    }

    Ok(())
}

fn write_to_file(
    table: &ReportTable,
    format: ExportFormat,
    currency: &str,
    path: &Path,
) -> NorthwindResult<()> {
    let file = File::create(path).map_err(|e| {
        NorthwindError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_report(table, format, currency, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// History is best effort: a failed write never fails the report
fn record_run(history: &RunHistory, table: &ReportTable, dataset_path: &Path, started: Instant) {
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let entry = RunEntry::new(
        table.kind.name(),
        table.len(),
        dataset_path.display().to_string(),
        elapsed_ms,
    );
    if let Err(e) = history.record(&entry) {
        warn!("Could not record run history: {}", e);
    }
}
