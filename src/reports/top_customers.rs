//! Top Customers Report
//!
//! Ranks customers by the revenue of their orders.

use std::collections::{BTreeMap, BTreeSet};

use super::revenue::{index_by, join_lines};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{CustomerId, Money, OrderId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 6] = [
    Column::new("customer_id", "Customer", ColumnKind::Text),
    Column::new("company_name", "Company", ColumnKind::Text),
    Column::new("country", "Country", ColumnKind::Text),
    Column::new("revenue", "Revenue", ColumnKind::Money),
    Column::new("order_count", "Orders", ColumnKind::Integer),
    Column::new("average_order_value", "Avg Order", ColumnKind::Money),
];

/// Revenue summary for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRevenueRow {
    pub customer_id: CustomerId,
    pub company_name: String,
    pub country: String,
    /// Total revenue across the customer's orders
    pub revenue: Money,
    /// Number of distinct orders with at least one line
    pub order_count: usize,
    pub average_order_value: Option<Money>,
}

/// Top-N customers by revenue
#[derive(Debug, Clone)]
pub struct TopCustomersReport {
    pub limit: usize,
    /// Sorted by revenue descending, then customer id
    pub rows: Vec<CustomerRevenueRow>,
}

impl TopCustomersReport {
    fn build(dataset: &Dataset, limit: usize) -> Result<Self, MissingTable> {
        let customers = index_by(dataset.customers()?, |c| c.customer_id.clone());
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut totals: BTreeMap<&CustomerId, (Money, BTreeSet<OrderId>)> = BTreeMap::new();
        for fact in &facts {
            if !customers.contains_key(&fact.order.customer_id) {
                continue;
            }
            let entry = totals
                .entry(&fact.order.customer_id)
                .or_insert_with(|| (Money::zero(), BTreeSet::new()));
            entry.0 += fact.revenue;
            entry.1.insert(fact.order.order_id);
        }

        let mut rows: Vec<CustomerRevenueRow> = totals
            .into_iter()
            .filter_map(|(id, (revenue, orders))| {
                let customer = customers.get(id)?;
                Some(CustomerRevenueRow {
                    customer_id: id.clone(),
                    company_name: customer.company_name.clone(),
                    country: customer.country.clone(),
                    revenue,
                    order_count: orders.len(),
                    average_order_value: revenue.average_over(orders.len()),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        rows.truncate(limit);

        Ok(Self { limit, rows })
    }

    /// Sum of revenue over the listed customers
    pub fn total_revenue(&self) -> Money {
        self.rows.iter().map(|r| r.revenue).sum()
    }
}

impl Report for TopCustomersReport {
    const KIND: ReportKind = ReportKind::TopCustomers;

    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset, options.top_customers).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::text(&row.customer_id),
                Cell::text(&row.company_name),
                Cell::text(&row.country),
                Cell::Money(row.revenue),
                Cell::count(row.order_count),
                Cell::opt_money(row.average_order_value),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Order;
    use crate::reports::fixture;
    use crate::reports::revenue::total_revenue;

    fn options(limit: usize) -> ReportOptions {
        ReportOptions {
            top_customers: limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_customers_by_revenue() {
        let report = TopCustomersReport::generate(&fixture::northwind(), &options(10)).unwrap();

        let ids: Vec<&str> = report.rows.iter().map(|r| r.customer_id.as_str()).collect();
        assert_eq!(ids, vec!["CHOPS", "ALFKI", "BONAP", "DUMON"]);

        let alfki = &report.rows[1];
        assert_eq!(alfki.revenue, Money::from_cents(48000));
        assert_eq!(alfki.order_count, 2);
        assert_eq!(alfki.average_order_value, Some(Money::from_cents(24000)));
        assert_eq!(alfki.country, "Germany");
    }

    #[test]
    fn test_limit_truncates() {
        let report = TopCustomersReport::generate(&fixture::northwind(), &options(2)).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].customer_id.as_str(), "CHOPS");
    }

    #[test]
    fn test_revenue_is_conserved() {
        let dataset = fixture::northwind();
        let report = TopCustomersReport::generate(&dataset, &options(usize::MAX)).unwrap();
        assert_eq!(
            report.total_revenue(),
            total_revenue(dataset.order_details().unwrap())
        );
    }

    #[test]
    fn test_ties_break_by_customer_id() {
        let mut dataset = fixture::northwind();
        // Raise DUMON to CHOPS's 500 with a second order
        dataset.orders.as_mut().unwrap().push(Order::new(
            16,
            "DUMON",
            1,
            1,
            fixture::date(2024, 3, 1),
        ));
        dataset
            .order_details
            .as_mut()
            .unwrap()
            .push(fixture::line(16, 4, 500, 70, Default::default()));

        let report = TopCustomersReport::generate(&dataset, &options(10)).unwrap();
        let ids: Vec<&str> = report.rows.iter().map(|r| r.customer_id.as_str()).collect();
        assert_eq!(ids, vec!["CHOPS", "DUMON", "ALFKI", "BONAP"]);
    }

    #[test]
    fn test_unknown_customer_is_dropped() {
        let mut dataset = fixture::northwind();
        dataset.orders.as_mut().unwrap()[0].customer_id = CustomerId::from("GHOST");

        let report = TopCustomersReport::generate(&dataset, &options(10)).unwrap();
        let alfki = report
            .rows
            .iter()
            .find(|r| r.customer_id.as_str() == "ALFKI")
            .unwrap();
        assert_eq!(alfki.revenue, Money::from_cents(28000));
        assert!(report.rows.iter().all(|r| r.customer_id.as_str() != "GHOST"));
    }

    #[test]
    fn test_table_shape() {
        let report = TopCustomersReport::generate(&fixture::northwind(), &options(10)).unwrap();
        let table = report.to_table();
        assert_eq!(table.columns.len(), 6);
        assert_eq!(table.rows[0][0], Cell::text("CHOPS"));
        assert_eq!(table.rows[0][3], Cell::Money(Money::from_cents(50000)));
    }
}
