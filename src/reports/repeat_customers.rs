//! Repeat Customers Report
//!
//! Customers with more than a minimum number of orders, with the average
//! number of days between consecutive orders.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::revenue::index_by;
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{round2, CustomerId, OrderId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 6] = [
    Column::new("customer_id", "Customer", ColumnKind::Text),
    Column::new("company_name", "Company", ColumnKind::Text),
    Column::new("order_count", "Orders", ColumnKind::Integer),
    Column::new("first_order", "First Order", ColumnKind::Text),
    Column::new("last_order", "Last Order", ColumnKind::Text),
    Column::new("average_gap_days", "Avg Days Between", ColumnKind::Decimal),
];

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatCustomerRow {
    pub customer_id: CustomerId,
    pub company_name: String,
    pub order_count: usize,
    pub first_order: NaiveDate,
    pub last_order: NaiveDate,
    /// Mean days between consecutive orders; `None` with a single order
    pub average_gap_days: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct RepeatCustomersReport {
    pub min_orders: usize,
    /// Order count descending, ties by customer id
    pub rows: Vec<RepeatCustomerRow>,
}

/// Average gap in days between consecutive dates
///
/// `dates` must be sorted ascending. The first date has no predecessor and
/// contributes no gap.
pub fn average_gap_days(dates: &[NaiveDate]) -> Option<Decimal> {
    if dates.len() < 2 {
        return None;
    }
    let total_days: i64 = dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .sum();
    let gaps = Decimal::from(dates.len() - 1);
    Decimal::from(total_days).checked_div(gaps).map(round2)
}

impl RepeatCustomersReport {
    fn build(dataset: &Dataset, min_orders: usize) -> Result<Self, MissingTable> {
        let customers = index_by(dataset.customers()?, |c| c.customer_id.clone());

        let mut by_customer: BTreeMap<&CustomerId, Vec<(NaiveDate, OrderId)>> = BTreeMap::new();
        for order in dataset.orders()? {
            if customers.contains_key(&order.customer_id) {
                by_customer
                    .entry(&order.customer_id)
                    .or_default()
                    .push((order.order_date, order.order_id));
            }
        }

        let mut rows: Vec<RepeatCustomerRow> = by_customer
            .into_iter()
            .filter(|(_, orders)| orders.len() > min_orders)
            .filter_map(|(customer_id, mut orders)| {
                let customer = customers.get(customer_id)?;
                orders.sort();
                let dates: Vec<NaiveDate> = orders.iter().map(|(date, _)| *date).collect();
                Some(RepeatCustomerRow {
                    customer_id: customer_id.clone(),
                    company_name: customer.company_name.clone(),
                    order_count: dates.len(),
                    first_order: *dates.first()?,
                    last_order: *dates.last()?,
                    average_gap_days: average_gap_days(&dates),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.order_count
                .cmp(&a.order_count)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });

        Ok(Self { min_orders, rows })
    }
}

impl Report for RepeatCustomersReport {
    const KIND: ReportKind = ReportKind::RepeatCustomers;

    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset, options.repeat_customer_min_orders)
            .map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::text(&row.customer_id),
                Cell::text(&row.company_name),
                Cell::count(row.order_count),
                Cell::date(row.first_order),
                Cell::date(row.last_order),
                Cell::opt_decimal(row.average_gap_days),
            ]);
        }
        table.with_caption(format!("Customers with more than {} orders", self.min_orders))
    }
}
