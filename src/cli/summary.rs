//! `summary` command
//!
//! Loads a plan snapshot, runs the settlement engine, and prints the
//! per-member table.

use std::path::Path;

use log::debug;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::SplitbookResult;
use crate::models::PlanSnapshot;
use crate::services::settle;

/// Handle the `summary` command
pub fn handle_summary(snapshot_path: &Path, settings: &Settings) -> SplitbookResult<()> {
    let snapshot = PlanSnapshot::from_path(snapshot_path)?;
    debug!(
        "loaded snapshot '{}' ({}): {} members",
        snapshot.name,
        snapshot.period,
        snapshot.members.len()
    );

    let summary = settle(&snapshot);

    if snapshot.name.is_empty() {
        println!("Settlement for {}", snapshot.period);
    } else {
        println!("Settlement for {} ({})", snapshot.name, snapshot.period);
    }
    println!();
    print!(
        "{}",
        format_summary(&summary, &snapshot.member_names(), &settings.currency_symbol)
    );

    Ok(())
}
