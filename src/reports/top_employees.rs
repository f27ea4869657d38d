//! Top Employees Report
//!
//! Ranks employees by the revenue of the orders they handled.

use std::collections::{BTreeMap, BTreeSet};

use super::revenue::{index_by, join_lines};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{CustomerId, EmployeeId, Money, OrderId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 6] = [
    Column::new("employee_id", "ID", ColumnKind::Integer),
    Column::new("employee_name", "Employee", ColumnKind::Text),
    Column::new("revenue", "Revenue", ColumnKind::Money),
    Column::new("customers_served", "Customers", ColumnKind::Integer),
    Column::new("order_count", "Orders", ColumnKind::Integer),
    Column::new("revenue_per_order", "Avg per Order", ColumnKind::Money),
];

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRevenueRow {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub revenue: Money,
    /// Distinct customers across the employee's orders
    pub customers_served: usize,
    pub order_count: usize,
    pub revenue_per_order: Option<Money>,
}

#[derive(Default)]
struct Tally<'a> {
    revenue: Money,
    customers: BTreeSet<&'a CustomerId>,
    orders: BTreeSet<OrderId>,
}

/// Top-N employees by revenue handled
#[derive(Debug, Clone)]
pub struct TopEmployeesReport {
    pub limit: usize,
    pub rows: Vec<EmployeeRevenueRow>,
}

impl TopEmployeesReport {
    fn build(dataset: &Dataset, limit: usize) -> Result<Self, MissingTable> {
        let employees = index_by(dataset.employees()?, |e| e.employee_id);
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut tallies: BTreeMap<EmployeeId, Tally<'_>> = BTreeMap::new();
        for fact in &facts {
            let employee_id = fact.order.employee_id;
            if !employees.contains_key(&employee_id) {
                continue;
            }
            let tally = tallies.entry(employee_id).or_default();
            tally.revenue += fact.revenue;
            tally.customers.insert(&fact.order.customer_id);
            tally.orders.insert(fact.order.order_id);
        }

        let mut rows: Vec<EmployeeRevenueRow> = tallies
            .into_iter()
            .filter_map(|(id, tally)| {
                let employee = employees.get(&id)?;
                Some(EmployeeRevenueRow {
                    employee_id: id,
                    employee_name: employee.full_name(),
                    revenue: tally.revenue,
                    customers_served: tally.customers.len(),
                    order_count: tally.orders.len(),
                    revenue_per_order: tally.revenue.average_over(tally.orders.len()),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });
        rows.truncate(limit);

        Ok(Self { limit, rows })
    }

    /// Sum of revenue over the listed employees
    pub fn total_revenue(&self) -> Money {
        self.rows.iter().map(|r| r.revenue).sum()
    }
}

impl Report for TopEmployeesReport {
    const KIND: ReportKind = ReportKind::TopEmployees;

    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset, options.top_employees).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::Integer(i64::from(row.employee_id.get())),
                Cell::text(&row.employee_name),
                Cell::Money(row.revenue),
                Cell::count(row.customers_served),
                Cell::count(row.order_count),
                Cell::opt_money(row.revenue_per_order),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixture;
    use crate::reports::revenue::total_revenue;

    fn options(limit: usize) -> ReportOptions {
        ReportOptions {
            top_employees: limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_employees() {
        let report = TopEmployeesReport::generate(&fixture::northwind(), &options(5)).unwrap();

        let names: Vec<&str> = report.rows.iter().map(|r| r.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Nancy Davolio", "Janet Leverling", "Andrew Fuller"]);

        let nancy = &report.rows[0];
        assert_eq!(nancy.revenue, Money::from_cents(63000));
        assert_eq!(nancy.customers_served, 2);
        assert_eq!(nancy.order_count, 3);
        assert_eq!(nancy.revenue_per_order, Some(Money::from_cents(21000)));
    }

    #[test]
    fn test_limit() {
        let report = TopEmployeesReport::generate(&fixture::northwind(), &options(1)).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].employee_id, EmployeeId::new(1));
    }

    #[test]
    fn test_revenue_is_conserved() {
        let dataset = fixture::northwind();
        let report = TopEmployeesReport::generate(&dataset, &options(usize::MAX)).unwrap();
        assert_eq!(
            report.total_revenue(),
            total_revenue(dataset.order_details().unwrap())
        );
    }

    #[test]
    fn test_missing_employees_table() {
        let mut dataset = fixture::northwind();
        dataset.employees = None;
        let err = TopEmployeesReport::generate(&dataset, &options(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Report 'top-employees' requires table 'employees', which is missing from the dataset"
        );
    }
}
