//! Path management for Northwind Reports
//!
//! ## Path Resolution Order
//!
//! 1. `NORTHWIND_REPORTS_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/northwind-reports` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::NorthwindError;

/// Environment variable that overrides the base directory
pub const BASE_DIR_ENV: &str = "NORTHWIND_REPORTS_DIR";

/// Manages all paths used by Northwind Reports
#[derive(Debug, Clone)]
pub struct NorthwindPaths {
    base_dir: PathBuf,
}

impl NorthwindPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, NorthwindError> {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "northwind-reports")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    NorthwindError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Default dataset location: a CSV directory or `northwind.json` inside it
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Suggested place for exported reports, shown by `northwind config`
    ///
    /// Nothing is written here unless `--output` points at it.
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Append-only log of report runs
    pub fn history_log(&self) -> PathBuf {
        self.base_dir.join("history.log")
    }

    /// The dataset used when neither `--data` nor a configured path is given
    ///
    /// Prefers `data/northwind.json` when it exists, else the `data/` directory
    /// itself as a CSV directory.
    pub fn default_dataset(&self) -> PathBuf {
        let json = self.data_dir().join("northwind.json");
        if json.exists() {
            json
        } else {
            self.data_dir()
        }
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), NorthwindError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.export_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                NorthwindError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Check if `northwind init` has been run (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
