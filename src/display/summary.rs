//! Dataset summary display

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::report::{separator, NULL_MARKER};
use crate::reports::DatasetSummary;

/// Render a dataset summary for the terminal
pub fn render_summary(summary: &DatasetSummary, currency: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Table".to_string(), "Rows".to_string()]);
    for count in &summary.tables {
        let rows = count
            .rows
            .map_or_else(|| "missing".to_string(), |n| n.to_string());
        builder.push_record([count.table.to_string(), rows]);
    }
    let mut tables = builder.build();
    tables.with(Style::rounded());
    tables.modify(Columns::single(1), Alignment::right());

    let date_or_null = |d: Option<chrono::NaiveDate>| {
        d.map_or_else(|| NULL_MARKER.to_string(), |d| d.to_string())
    };

    let mut lines = vec![
        "Dataset Summary".to_string(),
        separator(15),
        tables.to_string(),
        format!(
            "Orders:        {} to {}",
            date_or_null(summary.first_order),
            date_or_null(summary.last_order)
        ),
        format!(
            "Total revenue: {}",
            summary
                .total_revenue
                .map_or_else(|| NULL_MARKER.to_string(), |m| m.format_with_symbol(currency))
        ),
    ];

    let dangling = &summary.dangling;
    if dangling.total() > 0 {
        lines.push("Dangling references (excluded from reports):".to_string());
        lines.push(format!("  lines without order:     {}", dangling.lines_without_order));
        lines.push(format!("  orders without customer: {}", dangling.orders_without_customer));
        lines.push(format!("  lines without product:   {}", dangling.lines_without_product));
    }

    lines.join("\n")
}
