//! Command handlers
//!
//! Each handler loads the document, runs one operation and hands the result
//! to a [`Presenter`]. Content failures (unreadable JSON, bad patterns, failed
//! writes) are reported through the presenter and do not fail the process;
//! only presenter I/O errors are returned.

use std::fs;
use std::io;
use std::path::Path;

use crate::analyze::{ExportFormat, analyze_prompts, save_analysis};
use crate::cli::Commands;
use crate::config::Config;
use crate::error::PromptError;
use crate::extract::extract_to_markdown;
use crate::input::load_document;
use crate::presenter::Presenter;
use crate::search::search_prompts;

/// Dispatch a parsed subcommand
pub fn run<P: Presenter>(command: Commands, config: &Config, presenter: &mut P) -> io::Result<()> {
    match command {
        Commands::Analyze {
            json_file,
            output,
            format,
        } => {
            let format = format.unwrap_or(config.analyze.format);
            analyze(presenter, &json_file, output.as_deref(), format)
        }
        Commands::Search {
            json_file,
            pattern,
            category,
        } => search(
            presenter,
            &json_file,
            pattern.as_deref(),
            category.as_deref(),
        ),
        Commands::Extract { json_file, output } => extract(presenter, &json_file, output.as_deref()),
    }
}

pub fn analyze<P: Presenter>(
    presenter: &mut P,
    json_file: &Path,
    output: Option<&Path>,
    format: ExportFormat,
) -> io::Result<()> {
    presenter.status(&format!("Analyzing {}...", json_file.display()))?;

    let stats = match load_document(json_file) {
        Ok(document) => analyze_prompts(&document),
        Err(e) => return report(presenter, "analyzing", &e),
    };
    presenter.stats(&stats)?;

    if let Some(path) = output {
        match save_analysis(&stats, path, format) {
            Ok(()) => presenter.success(&format!("Analysis saved to {}", path.display()))?,
            Err(e) => return report(presenter, "analyzing", &e),
        }
    }

    Ok(())
}

pub fn search<P: Presenter>(
    presenter: &mut P,
    json_file: &Path,
    pattern: Option<&str>,
    category: Option<&str>,
) -> io::Result<()> {
    presenter.status(&format!("Searching in {}...", json_file.display()))?;

    let results =
        load_document(json_file).and_then(|document| search_prompts(&document, pattern, category));

    match results {
        Ok(results) => presenter.search_results(&results),
        Err(e) => report(presenter, "searching", &e),
    }
}

pub fn extract<P: Presenter>(
    presenter: &mut P,
    json_file: &Path,
    output: Option<&Path>,
) -> io::Result<()> {
    presenter.status(&format!("Extracting prompts from {}...", json_file.display()))?;

    let markdown = match load_document(json_file) {
        Ok(document) => extract_to_markdown(&document),
        Err(e) => return report(presenter, "extracting", &e),
    };

    let Some(path) = output else {
        return presenter.markdown(&markdown);
    };

    match fs::write(path, markdown) {
        Ok(()) => presenter.success(&format!("Extracted to {}", path.display())),
        Err(e) => report(presenter, "extracting", &PromptError::from(e)),
    }
}

fn report<P: Presenter>(presenter: &mut P, action: &str, error: &PromptError) -> io::Result<()> {
    log::warn!("Error {} file: {:?}", action, error);
    presenter.error(&format!("Error {} file: {}", action, error))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
