//! Output types for the API

use crate::api::SegmentationMode;
use crate::domain::{PlaceCounts, TraceEvent, TraceLog};
use serde::Serialize;
use std::time::Duration;

/// Result of one analysis
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Surviving candidates with occurrence counts
    pub places: PlaceCounts,
    /// Raw candidates before filtering, in discovery order
    pub raw_candidates: Vec<String>,
    /// Every transition and filter decision, in order
    pub trace: TraceLog,
    /// Processing metadata
    pub metadata: AnalysisMetadata,
}

/// Metadata about the analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Segmentation mode requested
    pub segmentation: SegmentationMode,
    /// Whether any whitespace (not only U+0020) separated words
    pub whitespace_aware: bool,
    /// Whether POS evidence was available for filtering
    pub pos_available: bool,
    /// Characters scanned
    pub chars_processed: usize,
    /// Sentences returned by the POS oracle
    pub sentence_count: usize,
}

impl Analysis {
    /// Trace events of this analysis
    pub fn events(&self) -> &[TraceEvent] {
        self.trace.events()
    }

    /// Total surviving occurrences across all places
    pub fn total_occurrences(&self) -> usize {
        self.places.values().sum()
    }

    /// Places sorted by descending count, then name
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .places
            .iter()
            .map(|(place, count)| (place.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
