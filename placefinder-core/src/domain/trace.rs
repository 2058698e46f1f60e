//! Append-only diagnostic log of automaton steps and filter decisions
//!
//! The algorithm writes to the log but never reads it back. Reporting layers
//! consume the events after a scan completes.

use crate::domain::classifier::CharCategory;
use crate::domain::filter::Verdict;
use crate::domain::segmenter::{CharAction, CharState};
use crate::domain::token_dfa::{TokenAction, TokenState};
use serde::Serialize;
use std::collections::BTreeMap;

/// One trace record
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    ScanStarted {
        chars: usize,
    },
    CharStep {
        position: usize,
        ch: char,
        category: CharCategory,
        from: CharState,
        to: CharState,
        action: CharAction,
        phrase: String,
        word: String,
        connector: String,
    },
    EndOfInput {
        from: CharState,
        to: CharState,
        action: CharAction,
    },
    PosTagged {
        oracle: String,
        sentences: usize,
        tokens: usize,
    },
    /// POS evidence unavailable; capitalization-only fallback in effect
    PosDegraded {
        reason: String,
    },
    TokenStep {
        sentence: usize,
        token: String,
        tag: String,
        from: TokenState,
        to: TokenState,
        action: TokenAction,
        buffer: String,
    },
    SentenceBoundary {
        sentence: usize,
        from: TokenState,
        candidate: Option<String>,
    },
    FilterStarted {
        raw_candidates: Vec<String>,
    },
    FilterDecision {
        candidate: String,
        verdict: Verdict,
    },
    FilterFinished {
        places: BTreeMap<String, usize>,
    },
    ScanFinished {
        raw_candidates: usize,
        places: usize,
    },
}

impl TraceEvent {
    /// Start, end and phase-boundary events (everything except per-char,
    /// per-token and per-candidate records)
    pub fn is_boundary(&self) -> bool {
        !matches!(
            self,
            TraceEvent::CharStep { .. }
                | TraceEvent::TokenStep { .. }
                | TraceEvent::FilterDecision { .. }
        )
    }
}

/// Ordered, append-only event log
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
