//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use placefinder_core::SegmentationMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Treat newlines and tabs as word separators
    pub whitespace_aware: bool,

    /// Which automata produce candidates
    pub segmentation: SegmentationMode,

    /// Use POS evidence when filtering
    pub use_pos: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            whitespace_aware: false,
            segmentation: SegmentationMode::default(),
            use_pos: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include the trace log in JSON output
    pub include_trace: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_trace: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(!config.processing.whitespace_aware);
        assert!(config.processing.use_pos);
        assert_eq!(config.processing.segmentation, SegmentationMode::Character);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::from_toml_str(
            r#"
            [processing]
            segmentation = "hybrid"

            [output]
            default_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.processing.segmentation, SegmentationMode::Hybrid);
        assert!(config.processing.use_pos);
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.include_trace);
    }

    #[test]
    fn test_invalid_file() {
        let result = CliConfig::from_toml_str("[processing]\nsegmentation = \"sideways\"\n");
        assert!(result.is_err());

        let missing = CliConfig::from_file(Path::new("/nonexistent/placefinder.toml"));
        assert!(missing.unwrap_err().to_string().contains("Configuration error"));
    }
}
