//! Reports module for Northwind Reports
//!
//! Ten independent sales reports. Each is a pure function from a
//! [`Dataset`] snapshot and [`ReportOptions`] to a typed report, which
//! converts into a [`ReportTable`] for display and export.

pub mod category_leaders;
pub mod peak_month;
pub mod repeat_customers;
pub mod revenue;
pub mod summary;
pub mod supplier_share;
pub mod table;
pub mod top_countries;
pub mod top_customers;
pub mod top_employees;
pub mod top_shipper;
pub mod yearly_growth;
pub mod yearly_top_product;

#[cfg(test)]
pub(crate) mod fixture;

pub use category_leaders::{CategoryLeaderRow, CategoryLeadersReport};
pub use peak_month::{PeakMonthProductRow, PeakMonthReport};
pub use repeat_customers::{RepeatCustomerRow, RepeatCustomersReport};
pub use summary::DatasetSummary;
pub use supplier_share::{SupplierShareReport, SupplierShareRow};
pub use table::{Cell, Column, ColumnKind, ReportTable};
pub use top_countries::{CountryLeaderRow, TopCountriesReport};
pub use top_customers::{CustomerRevenueRow, TopCustomersReport};
pub use top_employees::{EmployeeRevenueRow, TopEmployeesReport};
pub use top_shipper::{ShipperRevenueRow, TopShipperReport};
pub use yearly_growth::{YearlyGrowthReport, YearlyGrowthRow};
pub use yearly_top_product::{YearlyTopProductReport, YearlyTopProductRow};

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{NorthwindError, NorthwindResult};
use crate::storage::Dataset;

/// Parameters shared by the reports
///
/// Each report reads only the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Rows in the top customers report
    pub top_customers: usize,
    /// Rows in the top employees report
    pub top_employees: usize,
    /// Products listed for the peak month
    pub peak_month_products: usize,
    /// Suppliers must exceed this share of total revenue, in percent
    pub supplier_share_threshold: Decimal,
    /// Customers must have strictly more orders than this
    pub repeat_customer_min_orders: usize,
    /// Countries in the top countries report
    pub top_countries: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_customers: 10,
            top_employees: 5,
            peak_month_products: 3,
            supplier_share_threshold: Decimal::TEN,
            repeat_customer_min_orders: 5,
            top_countries: 3,
        }
    }
}

/// The available reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportKind {
    TopCustomers,
    YearlyGrowth,
    TopEmployees,
    CategoryLeaders,
    PeakMonth,
    SupplierShare,
    RepeatCustomers,
    TopShipper,
    TopCountries,
    YearlyTopProduct,
}

impl ReportKind {
    pub const ALL: [ReportKind; 10] = [
        ReportKind::TopCustomers,
        ReportKind::YearlyGrowth,
        ReportKind::TopEmployees,
        ReportKind::CategoryLeaders,
        ReportKind::PeakMonth,
        ReportKind::SupplierShare,
        ReportKind::RepeatCustomers,
        ReportKind::TopShipper,
        ReportKind::TopCountries,
        ReportKind::YearlyTopProduct,
    ];

    /// Command-line name, also used for export file names
    pub const fn name(&self) -> &'static str {
        match self {
            ReportKind::TopCustomers => "top-customers",
            ReportKind::YearlyGrowth => "yearly-growth",
            ReportKind::TopEmployees => "top-employees",
            ReportKind::CategoryLeaders => "category-leaders",
            ReportKind::PeakMonth => "peak-month",
            ReportKind::SupplierShare => "supplier-share",
            ReportKind::RepeatCustomers => "repeat-customers",
            ReportKind::TopShipper => "top-shipper",
            ReportKind::TopCountries => "top-countries",
            ReportKind::YearlyTopProduct => "yearly-top-product",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            ReportKind::TopCustomers => "Top Customers by Revenue",
            ReportKind::YearlyGrowth => "Year-over-Year Revenue Growth",
            ReportKind::TopEmployees => "Top Employees by Revenue",
            ReportKind::CategoryLeaders => "Top Product per Category",
            ReportKind::PeakMonth => "Peak Revenue Month",
            ReportKind::SupplierShare => "Major Suppliers by Revenue Share",
            ReportKind::RepeatCustomers => "Repeat Customers",
            ReportKind::TopShipper => "Top Shipper",
            ReportKind::TopCountries => "Top Countries by Revenue",
            ReportKind::YearlyTopProduct => "Top Product per Year",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            ReportKind::TopCustomers => {
                "Customers ranked by revenue, with order count and average order value"
            }
            ReportKind::YearlyGrowth => "Revenue per year and growth over the previous year",
            ReportKind::TopEmployees => {
                "Employees ranked by revenue handled, customers served and revenue per order"
            }
            ReportKind::CategoryLeaders => {
                "Best-selling product of each category and the employee with most orders for it"
            }
            ReportKind::PeakMonth => "The highest-revenue month and its best-selling products",
            ReportKind::SupplierShare => "Suppliers above a share of total revenue",
            ReportKind::RepeatCustomers => {
                "Customers with many orders and the average days between their orders"
            }
            ReportKind::TopShipper => "The shipper handling the most revenue and its share",
            ReportKind::TopCountries => {
                "Countries ranked by revenue, each with its best-performing employee"
            }
            ReportKind::YearlyTopProduct => "The highest-revenue product of each year",
        }
    }

    /// Compute this report over a dataset snapshot
    pub fn generate(
        &self,
        dataset: &Dataset,
        options: &ReportOptions,
    ) -> NorthwindResult<ReportTable> {
        let started = Instant::now();
        let table = match self {
            ReportKind::TopCustomers => run::<TopCustomersReport>(dataset, options),
            ReportKind::YearlyGrowth => run::<YearlyGrowthReport>(dataset, options),
            ReportKind::TopEmployees => run::<TopEmployeesReport>(dataset, options),
            ReportKind::CategoryLeaders => run::<CategoryLeadersReport>(dataset, options),
            ReportKind::PeakMonth => run::<PeakMonthReport>(dataset, options),
            ReportKind::SupplierShare => run::<SupplierShareReport>(dataset, options),
            ReportKind::RepeatCustomers => run::<RepeatCustomersReport>(dataset, options),
            ReportKind::TopShipper => run::<TopShipperReport>(dataset, options),
            ReportKind::TopCountries => run::<TopCountriesReport>(dataset, options),
            ReportKind::YearlyTopProduct => run::<YearlyTopProductReport>(dataset, options),
        }?;
        info!(
            "Report {} produced {} rows in {:?}",
            self.name(),
            table.len(),
            started.elapsed()
        );
        Ok(table)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = NorthwindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| NorthwindError::UnknownReport(s.to_string()))
    }
}

/// A typed report
pub trait Report: Sized {
    const KIND: ReportKind;

    /// Compute the report; fails only when a required table is missing
    fn generate(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<Self>;

    /// Convert the typed rows into a presentation table
    fn to_table(&self) -> ReportTable;
}

fn run<R: Report>(dataset: &Dataset, options: &ReportOptions) -> NorthwindResult<ReportTable> {
    R::generate(dataset, options).map(|report| report.to_table())
}
