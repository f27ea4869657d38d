//! CSV export
//!
//! Column keys form the header row. Money and ratios are written with two
//! decimal places and no symbol; null cells are empty fields.

use std::io::Write;

use crate::error::NorthwindResult;
use crate::reports::{Cell, ReportTable};

/// Export a report table to CSV
pub fn export_csv<W: Write>(table: &ReportTable, writer: &mut W) -> NorthwindResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(table.columns.iter().map(|c| c.key))?;
    for row in &table.rows {
        csv.write_record(row.iter().map(Cell::plain))?;
    }

    csv.flush()?;
    Ok(())
}
