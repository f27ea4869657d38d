//! Small hand-checked dataset shared by the report tests
//!
//! Line revenue per order:
//!
//! | order | customer | employee | shipper | date       | revenue |
//! |-------|----------|----------|---------|------------|---------|
//! | 10    | ALFKI    | 1        | 1       | 2023-01-10 | 200     |
//! | 11    | BONAP    | 2        | 2       | 2023-03-15 | 200     |
//! | 12    | ALFKI    | 1        | 1       | 2024-01-05 | 280     |
//! | 13    | CHOPS    | 3        | 3       | 2024-01-20 | 500     |
//! | 14    | BONAP    | 2        | 1       | 2024-02-11 | 150     |
//! | 15    | DUMON    | 1        | 2       | 2024-02-28 | 150     |
//!
//! Total revenue is 1480. Product totals: Chai 420, Chang 800,
//! Aniseed Syrup 250, Ikura 10.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Category, Customer, Employee, Money, Order, OrderLine, Product, Shipper, Supplier,
};
use crate::storage::Dataset;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn line(order: u32, product: u32, price_cents: i64, quantity: u32, discount: Decimal) -> OrderLine {
    OrderLine::new(order, product, Money::from_cents(price_cents), quantity, discount)
}

pub fn northwind() -> Dataset {
    Dataset {
        customers: Some(vec![
            Customer::new("ALFKI", "Alfreds Futterkiste", "Germany"),
            Customer::new("BONAP", "Bon app'", "France"),
            Customer::new("CHOPS", "Chop-suey Chinese", "Switzerland"),
            Customer::new("DUMON", "Du monde entier", "France"),
        ]),
        orders: Some(vec![
            Order::new(10, "ALFKI", 1, 1, date(2023, 1, 10)),
            Order::new(11, "BONAP", 2, 2, date(2023, 3, 15)),
            Order::new(12, "ALFKI", 1, 1, date(2024, 1, 5)),
            Order::new(13, "CHOPS", 3, 3, date(2024, 1, 20)),
            Order::new(14, "BONAP", 2, 1, date(2024, 2, 11)),
            Order::new(15, "DUMON", 1, 2, date(2024, 2, 28)),
        ]),
        order_details: Some(vec![
            line(10, 1, 1000, 10, Decimal::ZERO),
            line(10, 3, 2000, 5, Decimal::ZERO),
            line(11, 2, 2500, 8, Decimal::ZERO),
            line(12, 1, 1000, 30, Decimal::new(10, 2)),
            line(12, 4, 500, 2, Decimal::ZERO),
            line(13, 2, 2500, 20, Decimal::ZERO),
            line(14, 3, 2000, 10, Decimal::new(25, 2)),
            line(15, 2, 2500, 4, Decimal::ZERO),
            line(15, 1, 1000, 5, Decimal::ZERO),
        ]),
        products: Some(vec![
            Product::new(1, "Chai", 1, 1),
            Product::new(2, "Chang", 1, 1),
            Product::new(3, "Aniseed Syrup", 2, 2),
            Product::new(4, "Ikura", 3, 3),
        ]),
        categories: Some(vec![
            Category::new(1, "Beverages"),
            Category::new(2, "Condiments"),
            Category::new(3, "Seafood"),
        ]),
        suppliers: Some(vec![
            Supplier::new(1, "Exotic Liquids"),
            Supplier::new(2, "New Orleans Cajun Delights"),
            Supplier::new(3, "Tokyo Traders"),
        ]),
        employees: Some(vec![
            Employee::new(1, "Nancy", "Davolio"),
            Employee::new(2, "Andrew", "Fuller"),
            Employee::new(3, "Janet", "Leverling"),
        ]),
        shippers: Some(vec![
            Shipper::new(1, "Speedy Express"),
            Shipper::new(2, "United Package"),
            Shipper::new(3, "Federal Shipping"),
        ]),
    }
}
