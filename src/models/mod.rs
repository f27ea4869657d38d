//! Core data models for Northwind Reports
//!
//! This module contains the read-only entities of the sales dataset:
//! customers, orders and their lines, the product catalog, employees and
//! shippers, plus the value types (ids, money, months) they are built from.

pub mod customer;
pub mod employee;
pub mod ids;
pub mod money;
pub mod order;
pub mod period;
pub mod product;

pub use customer::Customer;
pub use employee::{Employee, Shipper};
pub use ids::{CategoryId, CustomerId, EmployeeId, OrderId, ProductId, ShipperId, SupplierId};
pub use money::{round2, Money};
pub use order::{Order, OrderLine};
pub use period::YearMonth;
pub use product::{Category, Product, Supplier};
