//! Year-over-Year Growth Report
//!
//! Totals revenue per order year and compares each year to the one before.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::revenue::join_lines;
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::Money;
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 4] = [
    Column::new("year", "Year", ColumnKind::Integer),
    Column::new("revenue", "Revenue", ColumnKind::Money),
    Column::new("previous_revenue", "Previous Year", ColumnKind::Money),
    Column::new("growth_pct", "Growth %", ColumnKind::Percent),
];

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyGrowthRow {
    pub year: i32,
    pub revenue: Money,
    /// Revenue of the previous row; `None` for the first year
    pub previous_revenue: Option<Money>,
    /// `None` for the first year or when the previous year had no revenue
    pub growth_pct: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct YearlyGrowthReport {
    /// Ascending by year
    pub rows: Vec<YearlyGrowthRow>,
}

impl YearlyGrowthReport {
    fn build(dataset: &Dataset) -> Result<Self, MissingTable> {
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut by_year: BTreeMap<i32, Money> = BTreeMap::new();
        for fact in &facts {
            *by_year.entry(fact.order.order_date.year()).or_default() += fact.revenue;
        }

        // "Previous" is the previous row, as in a LAG over the ordered years
        let mut previous: Option<Money> = None;
        let mut rows = Vec::with_capacity(by_year.len());
        for (year, revenue) in by_year {
            let growth_pct = previous.and_then(|prev| (revenue - prev).percentage_of(prev));
            rows.push(YearlyGrowthRow {
                year,
                revenue,
                previous_revenue: previous,
                growth_pct,
            });
            previous = Some(revenue);
        }

        Ok(Self { rows })
    }
}

impl Report for YearlyGrowthReport {
    const KIND: ReportKind = ReportKind::YearlyGrowth;

    fn generate(dataset: &Dataset, _options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::Integer(i64::from(row.year)),
                Cell::Money(row.revenue),
                Cell::opt_money(row.previous_revenue),
                Cell::opt_percent(row.growth_pct),
            ]);
        }
        table
    }
}
