//! Tests for analysis export

use super::*;
use crate::analyze::analyze_prompts;
use insta::assert_snapshot;
use serde_json::json;
use tempfile::TempDir;

fn sample_stats() -> AnalysisStats {
    analyze_prompts(&json!({
        "system_prompts": ["You are a helpful assistant.", "Be kind."],
        "tools": {
            "bash": ["Run shell commands carefully.", "Quote paths.", "Never use -i."],
            "edit": ["Replace exact strings."]
        }
    }))
}

#[test]
fn test_json_export_uses_two_space_indent() {
    let rendered = render_export(&sample_stats(), ExportFormat::Json).unwrap();

    assert!(rendered.starts_with("{\n  \"total_categories\": 3,"));
    assert!(rendered.contains("\n    \"tools.bash\": 3"));
}

#[test]
fn test_json_export_keeps_non_ascii_literal() {
    let stats = analyze_prompts(&json!({"greetings": ["héllo wörld"]}));
    let rendered = render_export(&stats, ExportFormat::Json).unwrap();

    assert!(rendered.contains("héllo wörld"));
    assert!(!rendered.contains("\\u"));
}

#[test]
fn test_json_export_round_trip() {
    let stats = sample_stats();
    let rendered = render_export(&stats, ExportFormat::Json).unwrap();
    let reloaded: AnalysisStats = serde_json::from_str(&rendered).unwrap();

    assert_eq!(reloaded.total_categories, stats.total_categories);
    assert_eq!(reloaded.total_prompts, stats.total_prompts);
    assert_eq!(reloaded.categories, stats.categories);
}

#[test]
fn test_markdown_export() {
    let rendered = render_export(&sample_stats(), ExportFormat::Md).unwrap();
    assert_snapshot!(rendered, @r"
    # Prompt Analysis Results

    - **Total Categories:** 3
    - **Total Prompts:** 6
    - **Average Prompt Length:** 18.7 characters

    ## Categories Breakdown

    - **tools.bash:** 3 prompts
    - **system_prompts:** 2 prompts
    - **tools.edit:** 1 prompts
    ");
}

#[test]
fn test_text_export() {
    let rendered = render_export(&sample_stats(), ExportFormat::Txt).unwrap();
    assert_snapshot!(rendered, @r"
    PROMPT ANALYSIS RESULTS
    =========================

    Total Categories: 3
    Total Prompts: 6
    Average Prompt Length: 18.7 characters

    CATEGORIES BREAKDOWN
    --------------------
    tools.bash: 3 prompts
    system_prompts: 2 prompts
    tools.edit: 1 prompts
    ");
}

#[test]
fn test_empty_stats_markdown_has_no_breakdown_entries() {
    let rendered = render_export(&AnalysisStats::default(), ExportFormat::Md).unwrap();

    assert!(rendered.ends_with("## Categories Breakdown\n"));
    assert!(rendered.contains("0.0 characters"));
}

#[test]
fn test_save_analysis_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stats.txt");

    save_analysis(&sample_stats(), &path, ExportFormat::Txt).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("PROMPT ANALYSIS RESULTS"));
}

#[test]
fn test_save_analysis_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("stats.json");

    let result = save_analysis(&sample_stats(), &path, ExportFormat::Json);
    assert!(matches!(result, Err(PromptError::Io(_))));
}
