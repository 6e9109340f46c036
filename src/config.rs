//! Resolved runtime configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Extractor configuration after merging file values and command-line flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Where scripts are written; `None` writes next to the source file
    pub output_dir: Option<PathBuf>,

    /// Log filter directive (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Suppress progress and summary output
    pub quiet: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            quiet: false,
        }
    }
}

impl ExtractorConfig {
    /// Apply command-line flags on top of this configuration.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.output {
            self.output_dir = Some(dir.clone());
        }
        if cli.verbose {
            self.log_level = "debug".to_string();
        } else if cli.quiet {
            self.log_level = "error".to_string();
        }
        self.quiet = cli.quiet;
        self
    }
}
