//! Configuration module for Northwind Reports
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence
//! - Default report parameters

pub mod paths;
pub mod settings;

pub use paths::NorthwindPaths;
pub use settings::Settings;
