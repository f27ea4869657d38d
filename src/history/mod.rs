//! Run history for Northwind Reports
//!
//! Every report run appends one JSON line to `history.log` so past runs can
//! be listed with `northwind history`.

pub mod entry;
pub mod logger;

pub use entry::RunEntry;
pub use logger::RunHistory;
