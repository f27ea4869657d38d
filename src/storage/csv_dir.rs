//! CSV directory loader
//!
//! Reads one `<table>.csv` file per table from a directory. Files that do
//! not exist leave the table absent.

use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use super::{Dataset, Table};
use crate::error::{NorthwindError, NorthwindResult};

/// Load every known table from `dir`
pub fn load_csv_dir(dir: &Path) -> NorthwindResult<Dataset> {
    Ok(Dataset {
        customers: read_table(dir, Table::Customers)?,
        orders: read_table(dir, Table::Orders)?,
        order_details: read_table(dir, Table::OrderDetails)?,
        products: read_table(dir, Table::Products)?,
        categories: read_table(dir, Table::Categories)?,
        suppliers: read_table(dir, Table::Suppliers)?,
        employees: read_table(dir, Table::Employees)?,
        shippers: read_table(dir, Table::Shippers)?,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, table: Table) -> NorthwindResult<Option<Vec<T>>> {
    let path = dir.join(format!("{}.csv", table.name()));
    if !path.exists() {
        debug!("No {} found", path.display());
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|e| NorthwindError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: T = record.map_err(|e| {
            NorthwindError::Csv(format!(
                "{} row {}: {}",
                path.display(),
                index + 2,
                e
            ))
        })?;
        rows.push(row);
    }

    Ok(Some(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OrderId};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_csv_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("orders.csv"),
            "OrderID,CustomerID,EmployeeID,OrderDate,ShipVia\n\
             10248,VINET,5,1996-07-04 00:00:00,3\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("order_details.csv"),
            "order_id,product_id,unit_price,quantity,discount\n\
             10248,11,14.00,12,0\n\
             10248,42,9.80,10,0.15\n",
        )
        .unwrap();

        let dataset = load_csv_dir(temp_dir.path()).unwrap();

        let orders = dataset.orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, OrderId::new(10248));
        assert_eq!(
            orders[0].order_date,
            NaiveDate::from_ymd_opt(1996, 7, 4).unwrap()
        );

        let lines = dataset.order_details().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].revenue(), Money::from_cents(16800));
        assert_eq!(lines[1].revenue(), Money::from_cents(8330));

        assert!(dataset.customers.is_none());
    }

    #[test]
    fn test_bad_row_reports_line_number() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("shippers.csv"),
            "shipper_id,company_name\n1,Speedy Express\nnot-a-number,United Package\n",
        )
        .unwrap();

        let err = load_csv_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, NorthwindError::Csv(_)));
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_empty_discount_field_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("order_details.csv"),
            "OrderID,ProductID,UnitPrice,Quantity,Discount\n\
             10248,11,14.00,12,\n\
             10248,42,9.80,10, \n\
             10248,72,34.80,5,0.05\n",
        )
        .unwrap();

        let dataset = load_csv_dir(temp_dir.path()).unwrap();

        let lines = dataset.order_details().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].discount.is_zero());
        assert!(lines[1].discount.is_zero());
        assert_eq!(lines[0].revenue(), Money::from_cents(16800));
        assert_eq!(lines[2].revenue(), Money::from_cents(16530));
    }
}
