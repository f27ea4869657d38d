//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reporting engine.

pub mod dataset;
pub mod history;
pub mod report;

pub use dataset::{handle_list_command, handle_summary_command};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportArgs};
