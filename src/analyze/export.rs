//! Analysis export
//!
//! Serializes [`AnalysisStats`] to the file formats `analyze --output` writes.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use super::types::AnalysisStats;
use crate::error::PromptError;

/// File format for exported analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Md,
    Txt,
}

/// Render statistics in the requested format
pub fn render_export(stats: &AnalysisStats, format: ExportFormat) -> Result<String, PromptError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        ExportFormat::Md => Ok(stats_to_markdown(stats)),
        ExportFormat::Txt => Ok(stats_to_text(stats)),
    }
}

/// Write statistics to `path` in the requested format
pub fn save_analysis(
    stats: &AnalysisStats,
    path: &Path,
    format: ExportFormat,
) -> Result<(), PromptError> {
    let content = render_export(stats, format)?;
    fs::write(path, content)?;
    log::info!("Wrote {:?} analysis to {:?}", format, path);
    Ok(())
}

fn stats_to_markdown(stats: &AnalysisStats) -> String {
    let mut lines = vec![
        "# Prompt Analysis Results".to_string(),
        String::new(),
        format!("- **Total Categories:** {}", stats.total_categories),
        format!("- **Total Prompts:** {}", stats.total_prompts),
        format!(
            "- **Average Prompt Length:** {:.1} characters",
            stats.avg_prompt_length
        ),
        String::new(),
        "## Categories Breakdown".to_string(),
        String::new(),
    ];

    for (category, count) in stats.categories.sorted_by_count() {
        lines.push(format!("- **{}:** {} prompts", category, count));
    }

    lines.join("\n")
}

fn stats_to_text(stats: &AnalysisStats) -> String {
    let mut lines = vec![
        "PROMPT ANALYSIS RESULTS".to_string(),
        "=".repeat(25),
        String::new(),
        format!("Total Categories: {}", stats.total_categories),
        format!("Total Prompts: {}", stats.total_prompts),
        format!(
            "Average Prompt Length: {:.1} characters",
            stats.avg_prompt_length
        ),
        String::new(),
        "CATEGORIES BREAKDOWN".to_string(),
        "-".repeat(20),
    ];

    for (category, count) in stats.categories.sorted_by_count() {
        lines.push(format!("{}: {} prompts", category, count));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
