//! Path management for splitbook
//!
//! Provides platform-appropriate path resolution for configuration.
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITBOOK_CONFIG_DIR` environment variable (if set)
//! 2. Platform config directory via `directories`
//!    (Linux: `~/.config/splitbook`, macOS: `~/Library/Application
//!    Support/splitbook`, Windows: `%APPDATA%\splitbook`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SplitbookError;

/// Manages all paths used by splitbook
#[derive(Debug, Clone)]
pub struct SplitbookPaths {
    /// Base directory for all splitbook configuration
    base_dir: PathBuf,
}

impl SplitbookPaths {
    /// Create a new SplitbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, SplitbookError> {
        let base_dir = if let Ok(custom) = std::env::var("SPLITBOOK_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "splitbook")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SplitbookError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create SplitbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), SplitbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitbookError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}
