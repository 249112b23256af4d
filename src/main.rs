use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use splitbook::cli::{handle_config, handle_export, handle_summary, handle_validate, ExportFormat};
use splitbook::config::{paths::SplitbookPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "splitbook",
    author = "Kaylee Beyene",
    version,
    about = "Shared-household budget settlement from the command line",
    long_about = "splitbook settles one household budgeting period from a plan \
                  snapshot: per-member income, personal expenses, rounded slices \
                  of jointly-owed expenses, savings, and envelope tracking."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the settlement for a plan snapshot
    Summary {
        /// Path to the plan snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Validate a plan snapshot (share rules, amounts, roster)
    Validate {
        /// Path to the plan snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Export the settlement in a machine-readable format
    Export {
        /// Path to the plan snapshot (JSON)
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = SplitbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Summary { snapshot } => handle_summary(&snapshot, &settings)?,
        Commands::Validate { snapshot } => handle_validate(&snapshot)?,
        Commands::Export {
            snapshot,
            format,
            output,
        } => handle_export(&snapshot, format, output)?,
        Commands::Config => handle_config(&paths, &settings)?,
    }

    Ok(())
}
