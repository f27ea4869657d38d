//! Storage layer for Northwind Reports
//!
//! Loads the read-only sales dataset into an in-memory [`Dataset`] snapshot,
//! either from a single JSON document or from a directory of CSV files.
//! A table that is absent from the input stays absent (`None`) so reports
//! can tell "missing" apart from "empty".

pub mod csv_dir;
pub mod file_io;

pub use csv_dir::load_csv_dir;
pub use file_io::{read_json, read_json_required, write_json_atomic};

use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{NorthwindError, NorthwindResult};
use crate::models::{
    Category, Customer, Employee, Order, OrderLine, Product, Shipper, Supplier,
};

/// The tables a dataset is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Customers,
    Orders,
    OrderDetails,
    Products,
    Categories,
    Suppliers,
    Employees,
    Shippers,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::Customers,
        Table::Orders,
        Table::OrderDetails,
        Table::Products,
        Table::Categories,
        Table::Suppliers,
        Table::Employees,
        Table::Shippers,
    ];

    /// Table name as used for JSON keys and CSV file stems
    pub const fn name(&self) -> &'static str {
        match self {
            Table::Customers => "customers",
            Table::Orders => "orders",
            Table::OrderDetails => "order_details",
            Table::Products => "products",
            Table::Categories => "categories",
            Table::Suppliers => "suppliers",
            Table::Employees => "employees",
            Table::Shippers => "shippers",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A table required by a computation is absent from the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingTable(pub Table);

impl MissingTable {
    /// Attach the name of the report that needed the table
    pub fn in_report(self, report: &'static str) -> NorthwindError {
        NorthwindError::missing_table(report, self.0.name())
    }
}

fn require<T>(table: &Option<Vec<T>>, kind: Table) -> Result<&[T], MissingTable> {
    table.as_deref().ok_or(MissingTable(kind))
}

/// Immutable in-memory snapshot of the sales dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, alias = "Customers", skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<Customer>>,

    #[serde(default, alias = "Orders", skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,

    #[serde(
        default,
        alias = "OrderDetails",
        alias = "order_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_details: Option<Vec<OrderLine>>,

    #[serde(default, alias = "Products", skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    #[serde(default, alias = "Categories", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    #[serde(default, alias = "Suppliers", skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Vec<Supplier>>,

    #[serde(default, alias = "Employees", skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,

    #[serde(default, alias = "Shippers", skip_serializing_if = "Option::is_none")]
    pub shippers: Option<Vec<Shipper>>,
}

impl Dataset {
    /// A dataset with every table present and empty
    pub fn empty() -> Self {
        Self {
            customers: Some(Vec::new()),
            orders: Some(Vec::new()),
            order_details: Some(Vec::new()),
            products: Some(Vec::new()),
            categories: Some(Vec::new()),
            suppliers: Some(Vec::new()),
            employees: Some(Vec::new()),
            shippers: Some(Vec::new()),
        }
    }

    /// Load a dataset from a JSON file or a directory of CSV files
    pub fn load(path: impl AsRef<Path>) -> NorthwindResult<Self> {
        let path = path.as_ref();

        let dataset = if path.is_dir() {
            info!("Loading CSV dataset from {}", path.display());
            load_csv_dir(path)?
        } else if path.exists() {
            info!("Loading JSON dataset from {}", path.display());
            read_json_required(path)?
        } else {
            return Err(NorthwindError::Storage(format!(
                "Dataset not found: {}",
                path.display()
            )));
        };

        for table in Table::ALL {
            match dataset.row_count(table) {
                Some(rows) => debug!("Table {}: {} rows", table, rows),
                None => debug!("Table {}: absent", table),
            }
        }

        Ok(dataset)
    }

    pub fn customers(&self) -> Result<&[Customer], MissingTable> {
        require(&self.customers, Table::Customers)
    }

    pub fn orders(&self) -> Result<&[Order], MissingTable> {
        require(&self.orders, Table::Orders)
    }

    pub fn order_details(&self) -> Result<&[OrderLine], MissingTable> {
        require(&self.order_details, Table::OrderDetails)
    }

    pub fn products(&self) -> Result<&[Product], MissingTable> {
        require(&self.products, Table::Products)
    }

    pub fn categories(&self) -> Result<&[Category], MissingTable> {
        require(&self.categories, Table::Categories)
    }

    pub fn suppliers(&self) -> Result<&[Supplier], MissingTable> {
        require(&self.suppliers, Table::Suppliers)
    }

    pub fn employees(&self) -> Result<&[Employee], MissingTable> {
        require(&self.employees, Table::Employees)
    }

    pub fn shippers(&self) -> Result<&[Shipper], MissingTable> {
        require(&self.shippers, Table::Shippers)
    }

    /// Number of rows in a table, or `None` if the table is absent
    pub fn row_count(&self, table: Table) -> Option<usize> {
        match table {
            Table::Customers => self.customers.as_ref().map(Vec::len),
            Table::Orders => self.orders.as_ref().map(Vec::len),
            Table::OrderDetails => self.order_details.as_ref().map(Vec::len),
            Table::Products => self.products.as_ref().map(Vec::len),
            Table::Categories => self.categories.as_ref().map(Vec::len),
            Table::Suppliers => self.suppliers.as_ref().map(Vec::len),
            Table::Employees => self.employees.as_ref().map(Vec::len),
            Table::Shippers => self.shippers.as_ref().map(Vec::len),
        }
    }

    /// Tables absent from this dataset
    pub fn missing_tables(&self) -> Vec<Table> {
        Table::ALL
            .into_iter()
            .filter(|table| self.row_count(*table).is_none())
            .collect()
    }
}
