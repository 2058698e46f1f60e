//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use placefinder_core::Analysis;
use std::io::{self, Write};

/// Plain text formatter - outputs one `place: count` line per place
pub struct TextFormatter<W: Write> {
    writer: W,
    source_headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source_headers: false,
        }
    }

    /// Print a `==> source <==` line before each input's places
    pub fn with_source_headers(mut self, enabled: bool) -> Self {
        self.source_headers = enabled;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, analysis: &Analysis) -> Result<()> {
        if self.source_headers {
            writeln!(self.writer, "==> {source} <==")?;
        }
        for (place, count) in analysis.ranked() {
            writeln!(self.writer, "{place}: {count}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
