//! JSON export functionality
//!
//! Exports a computed settlement to JSON with schema versioning, suitable
//! for feeding into other tooling. All monetary fields stay integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SplitbookError, SplitbookResult};
use crate::models::{PlanPeriod, PlanSnapshot, PlanSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A settlement export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Plan display name
    pub plan_name: String,

    /// The period the settlement covers
    pub period: PlanPeriod,

    /// The computed settlement
    pub summary: PlanSummary,

    /// Export metadata for reference
    pub metadata: ExportMetadata,
}

/// Record counts for the snapshot the settlement was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub member_count: usize,
    pub income_count: usize,
    pub expense_count: usize,
    pub envelope_count: usize,
}

impl SummaryExport {
    /// Build an export document from a snapshot and its settlement
    pub fn new(snapshot: &PlanSnapshot, summary: PlanSummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plan_name: snapshot.name.clone(),
            period: snapshot.period,
            summary,
            metadata: ExportMetadata {
                member_count: snapshot.members.len(),
                income_count: snapshot.incomes.len(),
                expense_count: snapshot.expenses.len(),
                envelope_count: snapshot.envelopes.len(),
            },
        }
    }
}

/// Write a settlement export as pretty-printed JSON
pub fn export_summary_json<W: Write>(export: &SummaryExport, writer: &mut W) -> SplitbookResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| SplitbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitbookError::Export(e.to_string()))?;
    Ok(())
}
