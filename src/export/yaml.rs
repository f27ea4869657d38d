//! YAML export

use std::io::Write;

use super::json::Record;
use crate::error::NorthwindResult;
use crate::reports::ReportTable;

/// Export a report table to YAML, with the report title as a header comment
pub fn export_yaml<W: Write>(table: &ReportTable, writer: &mut W) -> NorthwindResult<()> {
    writeln!(writer, "# {}", table.kind.title())?;
    if let Some(caption) = &table.caption {
        writeln!(writer, "# {}", caption)?;
    }

    serde_yaml::to_writer(writer, &Record::all(table))?;
    Ok(())
}
