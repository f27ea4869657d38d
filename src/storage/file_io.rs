//! File I/O utilities
//!
//! JSON reading for datasets and settings, and atomic JSON writes so a
//! crash mid-save never leaves a truncated settings file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{NorthwindError, NorthwindResult};

fn open_reader(path: &Path) -> NorthwindResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        NorthwindError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> NorthwindResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }
    read_json_required(path)
}

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> NorthwindResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(NorthwindError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    serde_json::from_reader(open_reader(path)?).map_err(|e| {
        NorthwindError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> NorthwindResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            NorthwindError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| NorthwindError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| NorthwindError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| NorthwindError::Storage(format!("Failed to flush data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        NorthwindError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
