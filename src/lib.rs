//! Northwind Reports - analytical sales reports over the Northwind dataset
//!
//! This library loads the Northwind sample sales dataset into an immutable
//! in-memory snapshot and computes ten independent, read-only reports from
//! it: top customers, yearly growth, top employees, category leaders, the
//! peak month, major suppliers, repeat customers, the top shipper, top
//! countries and the top product of each year.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Dataset records, identifiers and the `Money` type
//! - `storage`: Dataset loading from JSON or CSV
//! - `reports`: The reporting engine
//! - `display`: Terminal rendering
//! - `export`: CSV, JSON and YAML output
//! - `history`: Log of report runs
//! - `cli`: Command handlers for the `northwind` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use northwind::reports::{ReportKind, ReportOptions};
//! use northwind::storage::Dataset;
//!
//! let dataset = Dataset::load("data/northwind.json")?;
//! let table = ReportKind::TopCustomers.generate(&dataset, &ReportOptions::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod history;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{NorthwindError, NorthwindResult};
