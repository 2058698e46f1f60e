//! Output formatting module

use anyhow::Result;
use placefinder_core::Analysis;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the result of analyzing one input
    fn format_document(&mut self, source: &str, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., write JSON array or totals)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `place: count` line per place
    Text,
    /// JSON array with one object per input
    Json,
    /// Markdown numbered list with totals
    Markdown,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "place: count lines, most frequent first",
            OutputFormat::Json => "JSON array of per-input results, optional trace",
            OutputFormat::Markdown => "numbered markdown list with a totals footer",
        }
    }

    /// Parse a format name as written in a configuration file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}
