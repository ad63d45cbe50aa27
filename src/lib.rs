//! prompt-tweaks library - prompt catalog analysis
//!
//! Loading, category walking, analysis, search and markdown extraction for
//! JSON prompt catalogs. The `prompt-tweaks` binary is a thin clap front end
//! over these modules.

pub mod analyze;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod json;
pub mod presenter;
pub mod search;
pub mod walker;

// Re-export commonly used types for convenience
pub use analyze::{AnalysisStats, analyze_prompts};
pub use error::PromptError;
pub use extract::extract_to_markdown;
pub use search::{SearchResult, search_prompts};
pub use walker::{Category, walk};
