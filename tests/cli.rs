//! End-to-end tests for the `northwind` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

const DATASET: &str = r#"{
  "customers": [
    {"CustomerID": "ALFKI", "CompanyName": "Alfreds Futterkiste", "Country": "Germany"},
    {"CustomerID": "BONAP", "CompanyName": "Bon app'", "Country": "France"},
    {"CustomerID": "CHOPS", "CompanyName": "Chop-suey Chinese", "Country": "Switzerland"},
    {"CustomerID": "DUMON", "CompanyName": "Du monde entier", "Country": "France"}
  ],
  "orders": [
    {"OrderID": 10, "CustomerID": "ALFKI", "EmployeeID": 1, "ShipVia": 1, "OrderDate": "2023-01-10"},
    {"OrderID": 11, "CustomerID": "BONAP", "EmployeeID": 2, "ShipVia": 2, "OrderDate": "2023-03-15 00:00:00"},
    {"OrderID": 12, "CustomerID": "ALFKI", "EmployeeID": 1, "ShipVia": 1, "OrderDate": "2024-01-05"},
    {"OrderID": 13, "CustomerID": "CHOPS", "EmployeeID": 3, "ShipVia": 3, "OrderDate": "2024-01-20"},
    {"OrderID": 14, "CustomerID": "BONAP", "EmployeeID": 2, "ShipVia": 1, "OrderDate": "2024-02-11"},
    {"OrderID": 15, "CustomerID": "DUMON", "EmployeeID": 1, "ShipVia": 2, "OrderDate": "2024-02-28T00:00:00Z"}
  ],
  "order_details": [
    {"OrderID": 10, "ProductID": 1, "UnitPrice": 10, "Quantity": 10, "Discount": 0},
    {"OrderID": 10, "ProductID": 3, "UnitPrice": 20, "Quantity": 5, "Discount": 0},
    {"OrderID": 11, "ProductID": 2, "UnitPrice": 25, "Quantity": 8, "Discount": 0},
    {"OrderID": 12, "ProductID": 1, "UnitPrice": 10, "Quantity": 30, "Discount": 0.1},
    {"OrderID": 12, "ProductID": 4, "UnitPrice": 5, "Quantity": 2, "Discount": 0},
    {"OrderID": 13, "ProductID": 2, "UnitPrice": 25, "Quantity": 20, "Discount": 0},
    {"OrderID": 14, "ProductID": 3, "UnitPrice": 20, "Quantity": 10, "Discount": 0.25},
    {"OrderID": 15, "ProductID": 2, "UnitPrice": 25, "Quantity": 4, "Discount": 0},
    {"OrderID": 15, "ProductID": 1, "UnitPrice": 10, "Quantity": 5, "Discount": 0}
  ],
  "products": [
    {"ProductID": 1, "ProductName": "Chai", "CategoryID": 1, "SupplierID": 1},
    {"ProductID": 2, "ProductName": "Chang", "CategoryID": 1, "SupplierID": 1},
    {"ProductID": 3, "ProductName": "Aniseed Syrup", "CategoryID": 2, "SupplierID": 2},
    {"ProductID": 4, "ProductName": "Ikura", "CategoryID": 3, "SupplierID": 3}
  ],
  "categories": [
    {"CategoryID": 1, "CategoryName": "Beverages"},
    {"CategoryID": 2, "CategoryName": "Condiments"},
    {"CategoryID": 3, "CategoryName": "Seafood"}
  ],
  "suppliers": [
    {"SupplierID": 1, "CompanyName": "Exotic Liquids", "Country": "UK"},
    {"SupplierID": 2, "CompanyName": "New Orleans Cajun Delights", "Country": "USA"},
    {"SupplierID": 3, "CompanyName": "Tokyo Traders", "Country": "Japan"}
  ],
  "employees": [
    {"EmployeeID": 1, "FirstName": "Nancy", "LastName": "Davolio"},
    {"EmployeeID": 2, "FirstName": "Andrew", "LastName": "Fuller"},
    {"EmployeeID": 3, "FirstName": "Janet", "LastName": "Leverling"}
  ],
  "shippers": [
    {"ShipperID": 1, "CompanyName": "Speedy Express"},
    {"ShipperID": 2, "CompanyName": "United Package"},
    {"ShipperID": 3, "CompanyName": "Federal Shipping"}
  ]
}"#;

/// A command isolated in its own config directory
fn northwind(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("northwind").unwrap();
    cmd.env("NORTHWIND_REPORTS_DIR", home)
        .env_remove("NORTHWIND_DATA")
        .env_remove("RUST_LOG");
    cmd
}

fn write_dataset(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("northwind.json");
    fs::write(&path, DATASET).unwrap();
    path
}

#[test]
fn test_list_shows_every_report() {
    let temp = TempDir::new().unwrap();
    northwind(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("top-customers"))
        .stdout(predicate::str::contains("yearly-top-product"));
}

#[test]
fn test_top_customers_csv() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(temp.path());

    northwind(temp.path())
        .args(["report", "top-customers", "--format", "csv", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "customer_id,company_name,country,revenue,order_count,average_order_value\n\
             CHOPS,Chop-suey Chinese,Switzerland,500.00,1,500.00\n",
        ));
}

#[test]
fn test_yearly_growth_json() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(temp.path());

    let output = northwind(temp.path())
        .args(["report", "yearly-growth", "-f", "json", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"year": 2023, "revenue": 400.0, "previous_revenue": null, "growth_pct": null},
            {"year": 2024, "revenue": 1080.0, "previous_revenue": 400.0, "growth_pct": 170.0}
        ])
    );
}

#[test]
fn test_table_output_uses_currency_symbol() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(temp.path());

    northwind(temp.path())
        .args(["report", "top-shipper", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Speedy Express"))
        .stdout(predicate::str::contains("$630.00"))
        .stdout(predicate::str::contains("42.57%"));
}

#[test]
fn test_missing_table_names_report_and_table() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("partial.json");
    fs::write(&data, r#"{"customers": [], "orders": [], "order_details": []}"#).unwrap();

    northwind(temp.path())
        .args(["report", "category-leaders", "--data"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Report 'category-leaders' requires table",
        ));
}

#[test]
fn test_unknown_report() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(temp.path());

    northwind(temp.path())
        .args(["report", "best-cats", "--data"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report: best-cats"));
}

#[test]
fn test_report_all_to_directory_and_history() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(temp.path());
    let out = temp.path().join("out");

    northwind(temp.path())
        .args(["report", "all", "--format", "yaml", "--output"])
        .arg(&out)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("10 reports exported"));

    let peak = fs::read_to_string(out.join("peak-month.yaml")).unwrap();
    assert!(peak.contains("# Peak month 2024-01 with revenue $780.00"));
    assert!(peak.contains("Chang"));

    northwind(temp.path())
        .args(["history", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yearly-top-product"))
        .stdout(predicate::str::contains("top-customers").not());
}

#[test]
fn test_csv_directory_dataset() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("csv");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("customers.csv"),
        "CustomerID,CompanyName,Country\nALFKI,Alfreds Futterkiste,Germany\n",
    )
    .unwrap();
    fs::write(
        dir.join("orders.csv"),
        "OrderID,CustomerID,EmployeeID,ShipVia,OrderDate\n1,ALFKI,1,1,1997-04-02 00:00:00\n",
    )
    .unwrap();
    fs::write(
        dir.join("order_details.csv"),
        "OrderID,ProductID,UnitPrice,Quantity,Discount\n1,1,18,10,0\n",
    )
    .unwrap();

    northwind(temp.path())
        .args(["report", "top-customers", "-f", "csv", "--data"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("ALFKI,Alfreds Futterkiste,Germany,180.00,1,180.00"));

    northwind(temp.path())
        .args(["summary", "--data"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing tables: products"));
}

#[test]
fn test_init_writes_settings() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");

    northwind(&home).arg("init").assert().success();
    assert!(home.join("config.json").exists());

    northwind(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top customers:          10"));
}
