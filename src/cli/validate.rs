//! `validate` command
//!
//! Runs write-path validation over a plan snapshot: share rules for every
//! common expense, amount signs, and roster consistency. Exits non-zero
//! (via the returned error) when any check fails, so the command can gate
//! scripts.

use std::path::Path;

use log::debug;

use crate::display::format_validation_errors;
use crate::error::{SplitbookError, SplitbookResult};
use crate::models::PlanSnapshot;
use crate::services::validate_snapshot;

/// Handle the `validate` command
pub fn handle_validate(snapshot_path: &Path) -> SplitbookResult<()> {
    let snapshot = PlanSnapshot::from_path(snapshot_path)?;
    debug!(
        "validating snapshot '{}': {} expenses, {} envelopes",
        snapshot.name,
        snapshot.expenses.len(),
        snapshot.envelopes.len()
    );

    let errors = validate_snapshot(&snapshot);
    print!("{}", format_validation_errors(&errors));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SplitbookError::InvalidSnapshot(errors.len()))
    }
}
