//! Dataset summary
//!
//! A quick health check of a loaded dataset: table sizes, the order date
//! range, total revenue and how many rows reference records that are not
//! there. Reports silently drop such rows, so the counts explain gaps in
//! their output.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::revenue::total_revenue;
use crate::models::{CustomerId, Money, OrderId, ProductId};
use crate::storage::{Dataset, Table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    /// `None` when the table is absent
    pub rows: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DanglingReferences {
    /// Order lines whose order does not exist
    pub lines_without_order: usize,
    /// Orders whose customer does not exist
    pub orders_without_customer: usize,
    /// Order lines whose product does not exist
    pub lines_without_product: usize,
}

impl DanglingReferences {
    pub fn total(&self) -> usize {
        self.lines_without_order + self.orders_without_customer + self.lines_without_product
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub tables: Vec<TableCount>,
    pub first_order: Option<NaiveDate>,
    pub last_order: Option<NaiveDate>,
    /// Revenue over all order lines; `None` without an order details table
    pub total_revenue: Option<Money>,
    /// Checks whose tables are absent count as zero
    pub dangling: DanglingReferences,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let tables = Table::ALL
            .into_iter()
            .map(|table| TableCount {
                table: table.name(),
                rows: dataset.row_count(table),
            })
            .collect();

        let orders = dataset.orders().ok();
        let lines = dataset.order_details().ok();

        let dates = orders.into_iter().flatten().map(|o| o.order_date);
        let (first_order, last_order) = dates.fold((None, None), |(first, last), date| {
            (
                Some(first.map_or(date, |f: NaiveDate| f.min(date))),
                Some(last.map_or(date, |l: NaiveDate| l.max(date))),
            )
        });

        let mut dangling = DanglingReferences::default();
        if let (Some(orders), Some(lines)) = (orders, lines) {
            let order_ids: HashSet<OrderId> = orders.iter().map(|o| o.order_id).collect();
            dangling.lines_without_order = lines
                .iter()
                .filter(|l| !order_ids.contains(&l.order_id))
                .count();
        }
        if let (Some(orders), Ok(customers)) = (orders, dataset.customers()) {
            let customer_ids: HashSet<&CustomerId> =
                customers.iter().map(|c| &c.customer_id).collect();
            dangling.orders_without_customer = orders
                .iter()
                .filter(|o| !customer_ids.contains(&o.customer_id))
                .count();
        }
        if let (Some(lines), Ok(products)) = (lines, dataset.products()) {
            let product_ids: HashSet<ProductId> = products.iter().map(|p| p.product_id).collect();
            dangling.lines_without_product = lines
                .iter()
                .filter(|l| !product_ids.contains(&l.product_id))
                .count();
        }

        Self {
            tables,
            first_order,
            last_order,
            total_revenue: lines.map(total_revenue),
            dangling,
        }
    }

    pub fn missing_tables(&self) -> Vec<&'static str> {
        self.tables
            .iter()
            .filter(|t| t.rows.is_none())
            .map(|t| t.table)
            .collect()
    }
}
