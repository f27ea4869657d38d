//! Custom error types for Northwind Reports
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Northwind Reports operations
#[derive(Error, Debug)]
pub enum NorthwindError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dataset loading errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A report needs a table the dataset does not have
    #[error("Report '{report}' requires table '{table}', which is missing from the dataset")]
    MissingTable {
        report: &'static str,
        table: &'static str,
    },

    /// No report with the given name
    #[error("Unknown report: {0}")]
    UnknownReport(String),
}

impl NorthwindError {
    /// Create a "missing table" error for a report
    pub fn missing_table(report: &'static str, table: &'static str) -> Self {
        Self::MissingTable { report, table }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for NorthwindError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NorthwindError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for NorthwindError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_yaml::Error> for NorthwindError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for Northwind Reports operations
pub type NorthwindResult<T> = Result<T, NorthwindError>;
