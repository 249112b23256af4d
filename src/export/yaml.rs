//! YAML export functionality
//!
//! Human-readable rendering of the settlement export document.

use std::io::Write;

use crate::error::SplitbookResult;
use crate::export::json::SummaryExport;

/// Write a settlement export as YAML with a header comment
pub fn export_summary_yaml<W: Write>(export: &SummaryExport, mut writer: W) -> SplitbookResult<()> {
    writeln!(writer, "# splitbook settlement export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# All amounts are integer cents")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, export)?;

    Ok(())
}
