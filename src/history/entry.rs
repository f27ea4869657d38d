//! Run history entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    pub run_at: DateTime<Utc>,

    /// Report name, e.g. `top-customers`
    pub report: String,

    /// Rows the report produced
    pub rows: usize,

    /// Dataset the report ran over
    pub dataset: String,

    pub elapsed_ms: u64,
}

impl RunEntry {
    /// An entry stamped with the current time
    pub fn new(
        report: impl Into<String>,
        rows: usize,
        dataset: impl Into<String>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            run_at: Utc::now(),
            report: report.into(),
            rows,
            dataset: dataset.into(),
            elapsed_ms,
        }
    }

    /// Format as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        format!(
            "{} {:<20} {:>5} rows {:>6} ms  {}",
            self.run_at.format("%Y-%m-%d %H:%M:%S"),
            self.report,
            self.rows,
            self.elapsed_ms,
            self.dataset
        )
    }
}
