//! JSON export
//!
//! A report becomes an array of objects, one per row, keyed by column key
//! in column order.

use std::io::Write;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::NorthwindResult;
use crate::reports::{Cell, Column, ReportTable};

/// One report row viewed as a map from column key to cell
pub struct Record<'a> {
    columns: &'a [Column],
    cells: &'a [Cell],
}

impl<'a> Record<'a> {
    /// Rows of a table as records
    pub fn all(table: &'a ReportTable) -> Vec<Record<'a>> {
        table
            .rows
            .iter()
            .map(|cells| Record {
                columns: &table.columns,
                cells,
            })
            .collect()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column.key, cell)?;
        }
        map.end()
    }
}

/// Export a report table to pretty-printed JSON
pub fn export_json<W: Write>(table: &ReportTable, writer: &mut W) -> NorthwindResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &Record::all(table))?;
    writeln!(writer)?;
    Ok(())
}
