//! Yearly Top Product Report
//!
//! The highest-revenue product of each order year. Equal revenue goes to the
//! lowest product id.

use std::collections::BTreeMap;

use chrono::Datelike;

use super::revenue::{index_by, join_lines, top_entry};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{Money, ProductId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 4] = [
    Column::new("year", "Year", ColumnKind::Integer),
    Column::new("product_id", "Product ID", ColumnKind::Integer),
    Column::new("product_name", "Product", ColumnKind::Text),
    Column::new("revenue", "Revenue", ColumnKind::Money),
];

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTopProductRow {
    pub year: i32,
    pub product_id: ProductId,
    pub product_name: String,
    pub revenue: Money,
}

#[derive(Debug, Clone)]
pub struct YearlyTopProductReport {
    /// One row per year with sales of a known product, ascending
    pub rows: Vec<YearlyTopProductRow>,
}

impl YearlyTopProductReport {
    fn build(dataset: &Dataset) -> Result<Self, MissingTable> {
        let products = index_by(dataset.products()?, |p| p.product_id);
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut by_year: BTreeMap<i32, BTreeMap<ProductId, Money>> = BTreeMap::new();
        for fact in facts
            .iter()
            .filter(|f| products.contains_key(&f.line.product_id))
        {
            *by_year
                .entry(fact.order.order_date.year())
                .or_default()
                .entry(fact.line.product_id)
                .or_default() += fact.revenue;
        }

        let rows = by_year
            .into_iter()
            .filter_map(|(year, by_product)| {
                let (product_id, revenue) = top_entry(by_product)?;
                let product = products.get(&product_id)?;
                Some(YearlyTopProductRow {
                    year,
                    product_id,
                    product_name: product.product_name.clone(),
                    revenue,
                })
            })
            .collect();

        Ok(Self { rows })
    }
}

impl Report for YearlyTopProductReport {
    const KIND: ReportKind = ReportKind::YearlyTopProduct;

    fn generate(dataset: &Dataset, _options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::Integer(i64::from(row.year)),
                Cell::Integer(i64::from(row.product_id.get())),
                Cell::text(&row.product_name),
                Cell::Money(row.revenue),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixture::{self, line};
    use rust_decimal::Decimal;

    fn generate(dataset: &Dataset) -> YearlyTopProductReport {
        YearlyTopProductReport::generate(dataset, &ReportOptions::default()).unwrap()
    }

    #[test]
    fn test_top_product_per_year() {
        let report = generate(&fixture::northwind());
        let rows: Vec<(i32, &str, Money)> = report
            .rows
            .iter()
            .map(|r| (r.year, r.product_name.as_str(), r.revenue))
            .collect();
        assert_eq!(
            rows,
            vec![
                (2023, "Chang", Money::from_cents(20000)),
                (2024, "Chang", Money::from_cents(60000)),
            ]
        );
    }

    #[test]
    fn test_tie_goes_to_lowest_product_id() {
        let mut dataset = fixture::northwind();
        // 2023: Chai 100 + 100 reaches Chang's 200
        dataset
            .order_details
            .as_mut()
            .unwrap()
            .push(line(11, 1, 1000, 10, Decimal::ZERO));

        let report = generate(&dataset);
        assert_eq!(report.rows[0].year, 2023);
        assert_eq!(report.rows[0].product_id, ProductId::new(1));
        assert_eq!(report.rows[0].revenue, Money::from_cents(20000));
    }

    #[test]
    fn test_unknown_products_are_skipped() {
        let mut dataset = fixture::northwind();
        dataset
            .order_details
            .as_mut()
            .unwrap()
            .push(line(10, 99, 100000, 1, Decimal::ZERO));

        let report = generate(&dataset);
        assert_eq!(report.rows[0].product_name, "Chang");
    }
}
