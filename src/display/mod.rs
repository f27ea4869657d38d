//! Display formatting for terminal output
//!
//! Provides utilities for rendering reports and dataset summaries as
//! terminal tables.

pub mod report;
pub mod summary;

pub use report::{format_cell, format_percentage, format_report_list, render_report};
pub use summary::render_summary;
