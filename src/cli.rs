use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::analyze::ExportFormat;

/// Analyze and process prompt catalogs stored as JSON
#[derive(Parser, Debug)]
#[command(
    name = "prompt-tweaks",
    version,
    about = "Prompt Tweaks - Analyze and process Claude Code system prompts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze prompt JSON files
    Analyze {
        #[arg(value_parser = existing_file)]
        json_file: PathBuf,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format [default: json, or the configured format]
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Search through prompts for specific patterns or categories
    Search {
        #[arg(value_parser = existing_file)]
        json_file: PathBuf,
        /// Search pattern (regex supported)
        #[arg(short, long)]
        pattern: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Extract prompts to a readable markdown format
    Extract {
        #[arg(value_parser = existing_file)]
        json_file: PathBuf,
        /// Output markdown file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Reject paths that do not exist or cannot be opened before any command runs
fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Path '{}' does not exist.", value));
    }

    File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Path '{}' is not readable: {}", value, e))
}
