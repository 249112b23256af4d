//! `config` command
//!
//! Shows the resolved configuration paths and current settings.

use crate::config::{Settings, SplitbookPaths};
use crate::error::SplitbookResult;

/// Handle the `config` command
pub fn handle_config(paths: &SplitbookPaths, settings: &Settings) -> SplitbookResult<()> {
    println!("Configuration");
    println!("  Config dir:      {}", paths.base_dir().display());
    println!("  Settings file:   {}", paths.settings_file().display());
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    Ok(())
}
