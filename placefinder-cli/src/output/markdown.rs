//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use placefinder_core::Analysis;
use std::io::Write;

/// Markdown formatter - outputs places as a numbered markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    place_count: usize,
    occurrence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            place_count: 0,
            occurrence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        let ranked = analysis.ranked();
        if ranked.is_empty() {
            writeln!(self.writer, "*No places found*")?;
        }
        for (index, (place, count)) in ranked.iter().enumerate() {
            writeln!(self.writer, "{}. {} ({})", index + 1, place, count)?;
        }
        writeln!(self.writer)?;

        self.place_count += ranked.len();
        self.occurrence_count += analysis.total_occurrences();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total places: {} ({} occurrences)*",
            self.place_count, self.occurrence_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
