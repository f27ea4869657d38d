//! Tabular report output
//!
//! Every report converts its typed rows into a [`ReportTable`]: an ordered
//! list of named columns and rows of [`Cell`]s. Display and export work on
//! this shape only, so they stay independent of the individual reports.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::ReportKind;
use crate::models::{round2, Money};

/// How a column's values should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Money,
    Percent,
    Decimal,
}

impl ColumnKind {
    /// Numeric columns are right-aligned in terminal output
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnKind::Text)
    }
}

/// A named report column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Machine-readable key (CSV header, JSON field)
    pub key: &'static str,
    /// Human-readable title (terminal header)
    pub title: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(key: &'static str, title: &'static str, kind: ColumnKind) -> Self {
        Self { key, title, kind }
    }
}

/// A single value in a report row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Money(Money),
    /// Percentage value (e.g. 12.5 means 12.5%)
    Percent(Decimal),
    Decimal(Decimal),
    /// Undefined value: a ratio over zero, a first-year growth, an empty join
    Null,
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Cell::Text(value.to_string())
    }

    pub fn count(value: usize) -> Self {
        Cell::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }

    pub fn date(value: NaiveDate) -> Self {
        Cell::Text(value.format("%Y-%m-%d").to_string())
    }

    pub fn opt_text<T: ToString>(value: Option<T>) -> Self {
        value.map_or(Cell::Null, |v| Cell::text(v))
    }

    pub fn opt_money(value: Option<Money>) -> Self {
        value.map_or(Cell::Null, Cell::Money)
    }

    pub fn opt_percent(value: Option<Decimal>) -> Self {
        value.map_or(Cell::Null, Cell::Percent)
    }

    pub fn opt_decimal(value: Option<Decimal>) -> Self {
        value.map_or(Cell::Null, Cell::Decimal)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Plain rendering for CSV: no currency symbol, no percent sign, nulls empty
    pub fn plain(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(n) => n.to_string(),
            Cell::Money(m) => format!("{:.2}", m.rounded().amount()),
            Cell::Percent(p) | Cell::Decimal(p) => format!("{:.2}", round2(*p)),
            Cell::Null => String::new(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Integer(n) => serializer.serialize_i64(*n),
            Cell::Money(m) => serializer.serialize_f64(m.to_f64()),
            Cell::Percent(d) | Cell::Decimal(d) => {
                serializer.serialize_f64(round2(*d).to_f64().unwrap_or_default())
            }
            Cell::Null => serializer.serialize_none(),
        }
    }
}

/// The rendered result of one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub kind: ReportKind,
    /// Optional one-line context shown above the table (e.g. the peak month)
    pub caption: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn new(kind: ReportKind, columns: &[Column]) -> Self {
        Self {
            kind,
            caption: None,
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column with the given key
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// All values of one column, by key
    pub fn column_values(&self, key: &str) -> Vec<&Cell> {
        match self.column_index(key) {
            Some(index) => self.rows.iter().map(|row| &row[index]).collect(),
            None => Vec::new(),
        }
    }
}
