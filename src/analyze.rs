//! Analyze module
//!
//! Computes aggregate statistics over every category of a prompt catalog and
//! serializes them for export.

mod analyzer;
pub mod export;
mod types;

pub use analyzer::{SAMPLE_LIMIT, analyze_prompts};
pub use export::{ExportFormat, render_export, save_analysis};
pub use types::{AnalysisStats, CategoryCounts};
