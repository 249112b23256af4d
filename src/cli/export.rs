//! `export` command
//!
//! Computes the settlement for a snapshot and writes it to stdout or a file
//! in the requested format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::debug;

use crate::error::{SplitbookError, SplitbookResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml, SummaryExport};
use crate::models::PlanSnapshot;
use crate::services::settle;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Yaml,
}

/// Handle the `export` command
pub fn handle_export(
    snapshot_path: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SplitbookResult<()> {
    let snapshot = PlanSnapshot::from_path(snapshot_path)?;
    let summary = settle(&snapshot);
    debug!("exporting settlement as {:?}", format);

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SplitbookError::Export(format!("cannot create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    match format {
        ExportFormat::Json => {
            let export = SummaryExport::new(&snapshot, summary);
            export_summary_json(&export, &mut writer)?;
        }
        ExportFormat::Csv => {
            export_summary_csv(&summary, &snapshot.member_names(), &mut writer)?;
        }
        ExportFormat::Yaml => {
            let export = SummaryExport::new(&snapshot, summary);
            export_summary_yaml(&export, &mut writer)?;
        }
    }

    writer
        .flush()
        .map_err(|e| SplitbookError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!("Exported settlement to {}", path.display());
    }

    Ok(())
}
