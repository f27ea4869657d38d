//! Top Shipper Report
//!
//! The shipper that carried the most revenue, with its share of total
//! revenue. Equal revenue goes to the lowest shipper id.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::revenue::{index_by, join_lines, top_entry, total_revenue};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{Money, OrderId, ShipperId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 5] = [
    Column::new("shipper_id", "ID", ColumnKind::Integer),
    Column::new("company_name", "Shipper", ColumnKind::Text),
    Column::new("order_count", "Orders", ColumnKind::Integer),
    Column::new("revenue", "Revenue", ColumnKind::Money),
    Column::new("share_pct", "Share %", ColumnKind::Percent),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ShipperRevenueRow {
    pub shipper_id: ShipperId,
    pub company_name: String,
    pub order_count: usize,
    pub revenue: Money,
    /// `None` when total revenue is zero
    pub share_pct: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct TopShipperReport {
    pub total_revenue: Money,
    /// `None` when no order was shipped by a known shipper
    pub top: Option<ShipperRevenueRow>,
}

/// Revenue and distinct orders per known shipper
pub fn revenue_by_shipper(
    dataset: &Dataset,
) -> Result<BTreeMap<ShipperId, (Money, usize)>, MissingTable> {
    let shippers = index_by(dataset.shippers()?, |s| s.shipper_id);
    let facts = join_lines(dataset.orders()?, dataset.order_details()?);

    let mut totals: BTreeMap<ShipperId, (Money, BTreeSet<OrderId>)> = BTreeMap::new();
    for fact in facts
        .iter()
        .filter(|f| shippers.contains_key(&f.order.ship_via))
    {
        let entry = totals.entry(fact.order.ship_via).or_default();
        entry.0 += fact.revenue;
        entry.1.insert(fact.order.order_id);
    }

    Ok(totals
        .into_iter()
        .map(|(id, (revenue, orders))| (id, (revenue, orders.len())))
        .collect())
}

impl TopShipperReport {
    fn build(dataset: &Dataset) -> Result<Self, MissingTable> {
        let shippers = index_by(dataset.shippers()?, |s| s.shipper_id);
        let total = total_revenue(dataset.order_details()?);
        let by_shipper = revenue_by_shipper(dataset)?;

        let top = top_entry(by_shipper.iter().map(|(id, (revenue, _))| (*id, *revenue)))
            .and_then(|(shipper_id, revenue)| {
                let shipper = shippers.get(&shipper_id)?;
                let order_count = by_shipper.get(&shipper_id).map_or(0, |(_, count)| *count);
                Some(ShipperRevenueRow {
                    shipper_id,
                    company_name: shipper.company_name.clone(),
                    order_count,
                    revenue,
                    share_pct: revenue.percentage_of(total),
                })
            });

        Ok(Self {
            total_revenue: total,
            top,
        })
    }
}

impl Report for TopShipperReport {
    const KIND: ReportKind = ReportKind::TopShipper;

    fn generate(dataset: &Dataset, _options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        if let Some(row) = &self.top {
            table.push_row(vec![
                Cell::Integer(i64::from(row.shipper_id.get())),
                Cell::text(&row.company_name),
                Cell::count(row.order_count),
                Cell::Money(row.revenue),
                Cell::opt_percent(row.share_pct),
            ]);
        }
        table
    }
}
