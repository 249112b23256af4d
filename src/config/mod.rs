//! Configuration module for splitbook
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SplitbookPaths;
pub use settings::Settings;
