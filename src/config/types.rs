// Configuration type definitions

use std::io::IsTerminal;

use serde::Deserialize;

use crate::analyze::ExportFormat;

/// Terminal color selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Analyze configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeConfig {
    /// Export format used when `--format` is not given
    #[serde(default)]
    pub format: ExportFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub analyze: AnalyzeConfig,
}
