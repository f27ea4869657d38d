//! Peak Month Report
//!
//! Finds the calendar month with the highest revenue, then lists the
//! best-selling products within that month.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::revenue::{index_by, join_lines, rank_desc, top_entry};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{Money, ProductId, YearMonth};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 6] = [
    Column::new("month", "Month", ColumnKind::Text),
    Column::new("rank", "Rank", ColumnKind::Integer),
    Column::new("product_id", "Product ID", ColumnKind::Integer),
    Column::new("product_name", "Product", ColumnKind::Text),
    Column::new("product_revenue", "Revenue", ColumnKind::Money),
    Column::new("share_of_month_pct", "% of Month", ColumnKind::Percent),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PeakMonthProductRow {
    /// 1-based position within the month
    pub rank: usize,
    pub product_id: ProductId,
    pub product_name: String,
    pub revenue: Money,
    pub share_of_month_pct: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct PeakMonthReport {
    /// The highest-revenue month and its revenue; `None` without any orders
    pub peak: Option<(YearMonth, Money)>,
    pub rows: Vec<PeakMonthProductRow>,
}

impl PeakMonthReport {
    fn build(dataset: &Dataset, product_limit: usize) -> Result<Self, MissingTable> {
        let products = index_by(dataset.products()?, |p| p.product_id);
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut by_month: BTreeMap<YearMonth, Money> = BTreeMap::new();
        for fact in &facts {
            *by_month.entry(YearMonth::of(fact.order.order_date)).or_default() += fact.revenue;
        }

        // Ties go to the earliest month
        let Some((month, month_revenue)) = top_entry(by_month) else {
            return Ok(Self {
                peak: None,
                rows: Vec::new(),
            });
        };

        let mut by_product: BTreeMap<ProductId, Money> = BTreeMap::new();
        for fact in facts
            .iter()
            .filter(|f| YearMonth::of(f.order.order_date) == month)
            .filter(|f| products.contains_key(&f.line.product_id))
        {
            *by_product.entry(fact.line.product_id).or_default() += fact.revenue;
        }

        let mut ranked: Vec<(ProductId, Money)> = by_product.into_iter().collect();
        rank_desc(&mut ranked);

        let rows = ranked
            .into_iter()
            .take(product_limit)
            .enumerate()
            .filter_map(|(index, (product_id, revenue))| {
                let product = products.get(&product_id)?;
                Some(PeakMonthProductRow {
                    rank: index + 1,
                    product_id,
                    product_name: product.product_name.clone(),
                    revenue,
                    share_of_month_pct: revenue.percentage_of(month_revenue),
                })
            })
            .collect();

        Ok(Self {
            peak: Some((month, month_revenue)),
            rows,
        })
    }
}

impl Report for PeakMonthReport {
    const KIND: ReportKind = ReportKind::PeakMonth;

    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset, options.peak_month_products)
            .map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        let Some((month, revenue)) = self.peak else {
            return table;
        };

        for row in &self.rows {
            table.push_row(vec![
                Cell::text(month),
                Cell::count(row.rank),
                Cell::Integer(i64::from(row.product_id.get())),
                Cell::text(&row.product_name),
                Cell::Money(row.revenue),
                Cell::opt_percent(row.share_of_month_pct),
            ]);
        }
        table.with_caption(format!("Peak month {} with revenue {}", month, revenue))
    }
}
