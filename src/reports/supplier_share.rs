//! Supplier Share Report
//!
//! Suppliers whose products account for more than a threshold share of
//! total revenue.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::revenue::{index_by, rank_desc, total_revenue};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{Money, SupplierId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 5] = [
    Column::new("supplier_id", "ID", ColumnKind::Integer),
    Column::new("company_name", "Supplier", ColumnKind::Text),
    Column::new("country", "Country", ColumnKind::Text),
    Column::new("revenue", "Revenue", ColumnKind::Money),
    Column::new("share_pct", "Share %", ColumnKind::Percent),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierShareRow {
    pub supplier_id: SupplierId,
    pub company_name: String,
    pub country: Option<String>,
    pub revenue: Money,
    /// Share of total revenue, rounded to two places
    pub share_pct: Decimal,
}

#[derive(Debug, Clone)]
pub struct SupplierShareReport {
    /// Revenue over all order lines
    pub total_revenue: Money,
    pub threshold_pct: Decimal,
    /// Share descending, ties by supplier id
    pub rows: Vec<SupplierShareRow>,
}

/// Revenue per known supplier, via the products on each order line
pub fn revenue_by_supplier(dataset: &Dataset) -> Result<BTreeMap<SupplierId, Money>, MissingTable> {
    let suppliers = index_by(dataset.suppliers()?, |s| s.supplier_id);
    let products = index_by(dataset.products()?, |p| p.product_id);

    let mut totals: BTreeMap<SupplierId, Money> = BTreeMap::new();
    for line in dataset.order_details()? {
        let Some(product) = products.get(&line.product_id) else {
            continue;
        };
        if suppliers.contains_key(&product.supplier_id) {
            *totals.entry(product.supplier_id).or_default() += line.revenue();
        }
    }
    Ok(totals)
}

impl SupplierShareReport {
    fn build(dataset: &Dataset, threshold_pct: Decimal) -> Result<Self, MissingTable> {
        let suppliers = index_by(dataset.suppliers()?, |s| s.supplier_id);
        let total = total_revenue(dataset.order_details()?);

        let mut ranked: Vec<(SupplierId, Money)> = revenue_by_supplier(dataset)?
            .into_iter()
            // Compare the exact ratio: revenue / total * 100 > threshold
            .filter(|(_, revenue)| {
                !total.is_zero()
                    && revenue.amount() * Decimal::ONE_HUNDRED > threshold_pct * total.amount()
            })
            .collect();
        rank_desc(&mut ranked);

        let rows = ranked
            .into_iter()
            .filter_map(|(supplier_id, revenue)| {
                let supplier = suppliers.get(&supplier_id)?;
                Some(SupplierShareRow {
                    supplier_id,
                    company_name: supplier.company_name.clone(),
                    country: supplier.country.clone(),
                    revenue,
                    share_pct: revenue.percentage_of(total)?,
                })
            })
            .collect();

        Ok(Self {
            total_revenue: total,
            threshold_pct,
            rows,
        })
    }
}

impl Report for SupplierShareReport {
    const KIND: ReportKind = ReportKind::SupplierShare;

    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset, options.supplier_share_threshold)
            .map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::Integer(i64::from(row.supplier_id.get())),
                Cell::text(&row.company_name),
                Cell::opt_text(row.country.as_ref()),
                Cell::Money(row.revenue),
                Cell::Percent(row.share_pct),
            ]);
        }
        table.with_caption(format!(
            "Suppliers above {}% of total revenue {}",
            self.threshold_pct.normalize(),
            self.total_revenue
        ))
    }
}
