//! CLI commands that describe the dataset and the available reports

use std::path::Path;

use crate::config::Settings;
use crate::display::{format_report_list, render_summary};
use crate::error::NorthwindResult;
use crate::reports::DatasetSummary;
use crate::storage::Dataset;

/// Handle `northwind summary`
pub fn handle_summary_command(settings: &Settings, dataset_path: &Path) -> NorthwindResult<()> {
    let dataset = Dataset::load(dataset_path)?;
    let summary = DatasetSummary::from_dataset(&dataset);

    println!("Dataset: {}", dataset_path.display());
    println!("{}", render_summary(&summary, &settings.currency_symbol));

    let missing = summary.missing_tables();
    if !missing.is_empty() {
        println!();
        println!(
            "Missing tables: {}. Reports that need them will fail.",
            missing.join(", ")
        );
    }

    Ok(())
}

/// Handle `northwind list`
pub fn handle_list_command() {
    println!("Available reports:");
    println!();
    println!("{}", format_report_list());
    println!();
    println!("Run 'northwind report <NAME>' or 'northwind report all'.");
}
