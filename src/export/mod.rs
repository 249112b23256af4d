//! Export module for splitbook
//!
//! Provides settlement export in multiple formats:
//! - CSV: per-member rows (spreadsheet-compatible)
//! - JSON: machine-readable export document
//! - YAML: human-readable export document

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
