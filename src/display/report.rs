//! Report formatting for terminal output
//!
//! Renders a [`ReportTable`] with `tabled`. Numeric columns are
//! right-aligned, money carries the configured currency symbol and
//! undefined values show as `-`.

use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::round2;
use crate::reports::{Cell, ReportKind, ReportTable};

/// Placeholder shown for null cells
pub const NULL_MARKER: &str = "-";

/// Render a report with its title, caption and rows
pub fn render_report(table: &ReportTable, currency: &str) -> String {
    let title = table.kind.title();
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(title.chars().count()));
    output.push('\n');

    if let Some(caption) = &table.caption {
        output.push_str(caption);
        output.push('\n');
    }

    if table.is_empty() {
        output.push_str("No results.");
        return output;
    }

    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().map(|c| c.title.to_string()));
    for row in &table.rows {
        builder.push_record(row.iter().map(|cell| format_cell(cell, currency)));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    for (index, column) in table.columns.iter().enumerate() {
        if column.kind.is_numeric() {
            rendered.modify(Columns::single(index), Alignment::right());
        }
    }

    output.push_str(&rendered.to_string());
    output
}

/// Format a single cell for the terminal
pub fn format_cell(cell: &Cell, currency: &str) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Integer(n) => n.to_string(),
        Cell::Money(m) => m.format_with_symbol(currency),
        Cell::Percent(p) => format_percentage(*p),
        Cell::Decimal(d) => format!("{:.2}", round2(*d)),
        Cell::Null => NULL_MARKER.to_string(),
    }
}

/// Format a percentage with two decimal places
pub fn format_percentage(pct: Decimal) -> String {
    format!("{:.2}%", round2(pct))
}

/// One line per report: name and description
pub fn format_report_list() -> String {
    let width = ReportKind::ALL
        .iter()
        .map(|k| k.name().len())
        .max()
        .unwrap_or(0);

    ReportKind::ALL
        .iter()
        .map(|kind| format!("{:<width$}  {}", kind.name(), kind.description(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
