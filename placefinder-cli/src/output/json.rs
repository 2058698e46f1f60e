//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use placefinder_core::{Analysis, AnalysisMetadata, PlaceCounts, TraceEvent};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one object per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<serde_json::Value>,
    include_trace: bool,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
struct DocumentReport<'a> {
    source: &'a str,
    places: &'a PlaceCounts,
    raw_candidates: &'a [String],
    metadata: &'a AnalysisMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [TraceEvent]>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            include_trace: false,
            pretty: true,
        }
    }

    /// Embed each input's full trace log
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.include_trace = enabled;
        self
    }

    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, analysis: &Analysis) -> Result<()> {
        let report = DocumentReport {
            source,
            places: &analysis.places,
            raw_candidates: &analysis.raw_candidates,
            metadata: &analysis.metadata,
            trace: self.include_trace.then(|| analysis.events()),
        };
        self.documents.push(serde_json::to_value(report)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::render;

    fn output(formatter: JsonFormatter<Vec<u8>>) -> serde_json::Value {
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_document_fields() {
        let mut formatter = JsonFormatter::new(Vec::new());
        render(&mut formatter, &[("hague.txt", "The Hague is beautiful.")]);

        let json = output(formatter);
        assert_eq!(json[0]["source"], "hague.txt");
        assert_eq!(json[0]["places"]["The Hague"], 1);
        assert_eq!(json[0]["raw_candidates"][0], "The Hague");
        assert!(json[0].get("trace").is_none());
    }

    #[test]
    fn test_trace_included() {
        let mut formatter = JsonFormatter::new(Vec::new())
            .with_trace(true)
            .with_pretty(false);
        render(&mut formatter, &[("paris.txt", "Paris")]);

        let json = output(formatter);
        let trace = json[0]["trace"].as_array().unwrap();
        assert_eq!(trace[0]["event"], "scan_started");
        assert_eq!(trace.last().unwrap()["event"], "scan_finished");
    }
}
