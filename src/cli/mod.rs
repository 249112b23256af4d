//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod summary;
pub mod validate;

pub use config::handle_config;
pub use export::{handle_export, ExportFormat};
pub use summary::handle_summary;
pub use validate::handle_validate;
