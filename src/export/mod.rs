//! Export module for Northwind Reports
//!
//! Writes a [`ReportTable`] in one of several formats:
//! - Table: terminal rendering (see [`crate::display`])
//! - CSV: header row of column keys, one record per row
//! - JSON: array of objects keyed by column
//! - YAML: same structure as JSON, for human reading

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, Record};
pub use self::yaml::export_yaml;

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::display::render_report;
use crate::error::NorthwindResult;
use crate::reports::ReportTable;

/// Output format for report results
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension used when writing one file per report
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Table => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Table => "table",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Write a report in the given format
///
/// `currency` only affects the terminal table; machine formats carry plain
/// numbers.
pub fn write_report<W: Write>(
    table: &ReportTable,
    format: ExportFormat,
    currency: &str,
    writer: &mut W,
) -> NorthwindResult<()> {
    match format {
        ExportFormat::Table => {
            writeln!(writer, "{}", render_report(table, currency))?;
            Ok(())
        }
        ExportFormat::Csv => export_csv(table, writer),
        ExportFormat::Json => export_json(table, writer),
        ExportFormat::Yaml => export_yaml(table, writer),
    }
}
