//! Append-only run history
//!
//! Each report run is written as a single JSON line and flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{NorthwindError, NorthwindResult};

use super::entry::RunEntry;

/// Handles writing run entries to the history log (JSONL)
pub struct RunHistory {
    log_path: PathBuf,
}

impl RunHistory {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the history log
    pub fn record(&self, entry: &RunEntry) -> NorthwindResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NorthwindError::Io(format!("Failed to create history directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| NorthwindError::Io(format!("Failed to open run history: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| NorthwindError::Json(format!("Failed to serialize run entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| NorthwindError::Io(format!("Failed to write run entry: {}", e)))?;

        file.flush()
            .map_err(|e| NorthwindError::Io(format!("Failed to flush run history: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> NorthwindResult<Vec<RunEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| NorthwindError::Io(format!("Failed to open run history: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                NorthwindError::Io(format!(
                    "Failed to read run history line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: RunEntry = serde_json::from_str(&line).map_err(|e| {
                NorthwindError::Json(format!(
                    "Failed to parse run entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> NorthwindResult<Vec<RunEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
