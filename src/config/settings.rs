//! User settings for Northwind Reports
//!
//! Manages user preferences: where the dataset lives, how output is
//! rendered, and the default parameters of each report.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::NorthwindPaths;
use crate::error::NorthwindError;
use crate::export::ExportFormat;
use crate::reports::ReportOptions;
use crate::storage::{read_json, write_json_atomic};

/// User settings for Northwind Reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Dataset to load when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,

    /// Currency symbol used in terminal tables
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Default report parameters
    #[serde(default)]
    pub reports: ReportOptions,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dataset_path: None,
            currency_symbol: default_currency(),
            default_format: ExportFormat::default(),
            reports: ReportOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// Defaults are not written; `northwind init` persists them.
    pub fn load_or_create(paths: &NorthwindPaths) -> Result<Self, NorthwindError> {
        read_json(paths.settings_file()).map_err(|e| {
            NorthwindError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NorthwindPaths) -> Result<(), NorthwindError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Dataset to load: explicit override, then configured path, then the default
    pub fn resolve_dataset(&self, paths: &NorthwindPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.dataset_path.clone())
            .unwrap_or_else(|| paths.default_dataset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_format, ExportFormat::Table);
        assert_eq!(settings.reports.top_customers, 10);
        assert_eq!(settings.reports.supplier_share_threshold, dec!(10));
        assert_eq!(settings.reports.repeat_customer_min_orders, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NorthwindPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.default_format = ExportFormat::Csv;
        settings.reports.top_employees = 3;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NorthwindPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.reports, ReportOptions::default());
    }

    #[test]
    fn test_resolve_dataset_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NorthwindPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.resolve_dataset(&paths, None), paths.data_dir());

        settings.dataset_path = Some(PathBuf::from("/srv/northwind"));
        assert_eq!(
            settings.resolve_dataset(&paths, None),
            PathBuf::from("/srv/northwind")
        );
        assert_eq!(
            settings.resolve_dataset(&paths, Some(PathBuf::from("local.json"))),
            PathBuf::from("local.json")
        );
    }
}
