//! Top Countries Report
//!
//! Customer countries ranked by revenue, each paired with the employee who
//! brought in the most revenue from that country.
//!
//! Tie rules: equal country revenue is ordered by country name; equal
//! employee revenue goes to the lowest employee id.

use std::collections::BTreeMap;

use super::revenue::{index_by, join_lines, rank_desc, top_entry};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{EmployeeId, Money};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 5] = [
    Column::new("rank", "Rank", ColumnKind::Integer),
    Column::new("country", "Country", ColumnKind::Text),
    Column::new("country_revenue", "Revenue", ColumnKind::Money),
    Column::new("employee_name", "Top Employee", ColumnKind::Text),
    Column::new("employee_revenue", "Employee Revenue", ColumnKind::Money),
];

#[derive(Debug, Clone, PartialEq)]
pub struct CountryLeaderRow {
    pub rank: usize,
    pub country: String,
    pub country_revenue: Money,
    /// `None` when no order from the country has a known employee
    pub employee_id: Option<EmployeeId>,
    pub employee_name: Option<String>,
    pub employee_revenue: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct TopCountriesReport {
    pub limit: usize,
    pub rows: Vec<CountryLeaderRow>,
}

impl TopCountriesReport {
    fn build(dataset: &Dataset, limit: usize) -> Result<Self, MissingTable> {
        let customers = index_by(dataset.customers()?, |c| c.customer_id.clone());
        let employees = index_by(dataset.employees()?, |e| e.employee_id);
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut by_country: BTreeMap<&str, Money> = BTreeMap::new();
        let mut by_country_employee: BTreeMap<&str, BTreeMap<EmployeeId, Money>> =
            BTreeMap::new();
        for fact in &facts {
            let Some(customer) = customers.get(&fact.order.customer_id) else {
                continue;
            };
            let country = customer.country.as_str();
            *by_country.entry(country).or_default() += fact.revenue;
            if employees.contains_key(&fact.order.employee_id) {
                *by_country_employee
                    .entry(country)
                    .or_default()
                    .entry(fact.order.employee_id)
                    .or_default() += fact.revenue;
            }
        }

        let mut ranked: Vec<(&str, Money)> = by_country.into_iter().collect();
        rank_desc(&mut ranked);

        let rows = ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, (country, country_revenue))| {
                let top_employee = by_country_employee
                    .get(country)
                    .and_then(|by_employee| top_entry(by_employee.iter().map(|(id, m)| (*id, *m))));
                CountryLeaderRow {
                    rank: index + 1,
                    country: country.to_string(),
                    country_revenue,
                    employee_id: top_employee.map(|(id, _)| id),
                    employee_name: top_employee
                        .and_then(|(id, _)| employees.get(&id))
                        .map(|e| e.full_name()),
                    employee_revenue: top_employee.map(|(_, revenue)| revenue),
                }
            })
            .collect();

        Ok(Self { limit, rows })
    }
}

impl Report for TopCountriesReport {
    const KIND: ReportKind = ReportKind::TopCountries;

    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset, options.top_countries).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::count(row.rank),
                Cell::text(&row.country),
                Cell::Money(row.country_revenue),
                Cell::opt_text(row.employee_name.as_ref()),
                Cell::opt_money(row.employee_revenue),
            ]);
        }
        table
    }
}
