//! Main place finder implementation

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{Analysis, AnalysisMetadata, Config, Error, Input};
use crate::domain::{
    CharSegmenter, FilterPipeline, Lexicon, PlaceCounts, PosLookup, PosOracle, RuleTagger,
    StandardClassifier, TaggedSentence, TokenSegmenter, TraceEvent, TraceLog, UnavailableOracle,
};

/// Place-name candidate extractor
///
/// Every call to [`PlaceFinder::analyze`] builds its buffers, POS lookup and
/// trace log from scratch, so one instance can be reused for independent
/// inputs without any state carrying over.
pub struct PlaceFinder {
    config: Config,
    classifier: StandardClassifier,
    oracle: Option<Arc<dyn PosOracle>>,
    last_trace: TraceLog,
}

impl PlaceFinder {
    /// Create a finder with the default configuration
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::new()?)
    }

    /// Create a finder using the built-in rule tagger as POS oracle
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let oracle: Arc<dyn PosOracle> = match RuleTagger::new(Arc::clone(&config.lexicon)) {
            Ok(tagger) => Arc::new(tagger),
            Err(e) => Arc::new(UnavailableOracle::new(e.to_string())),
        };
        Ok(Self::with_oracle(config, oracle))
    }

    /// Create a finder with a caller-supplied POS oracle
    ///
    /// The oracle is ignored when the configuration disables POS evidence.
    pub fn with_oracle(config: Config, oracle: Arc<dyn PosOracle>) -> Self {
        let classifier = if config.whitespace_aware {
            StandardClassifier::whitespace_aware()
        } else {
            StandardClassifier::new()
        };
        let oracle = config.use_pos.then_some(oracle);

        Self {
            config,
            classifier,
            oracle,
            last_trace: TraceLog::new(),
        }
    }

    /// Find places and keep the trace for [`PlaceFinder::trace`]
    pub fn find_places(&mut self, text: &str) -> PlaceCounts {
        let analysis = self.analyze(text);
        self.last_trace = analysis.trace;
        analysis.places
    }

    /// Trace of the most recent [`PlaceFinder::find_places`] call
    pub fn trace(&self) -> &[TraceEvent] {
        self.last_trace.events()
    }

    /// Process input, enforcing the configured input cap
    pub fn process(&self, input: Input) -> Result<Analysis, Error> {
        let text = input.into_text()?;

        if let Some(limit) = self.config.max_input_chars {
            let len = text.chars().count();
            if len > limit {
                return Err(Error::InvalidInput(format!(
                    "input has {len} characters, limit is {limit}"
                )));
            }
        }

        Ok(self.analyze(&text))
    }

    /// Process input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Analysis, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Run the full scan over `text`
    pub fn analyze(&self, text: &str) -> Analysis {
        let start = Instant::now();
        let lexicon: &Lexicon = &self.config.lexicon;
        let mode = self.config.segmentation;

        let mut trace = TraceLog::new();
        let chars = text.chars().count();
        trace.push(TraceEvent::ScanStarted { chars });

        if text.trim().is_empty() {
            trace.push(TraceEvent::ScanFinished {
                raw_candidates: 0,
                places: 0,
            });
            return Analysis {
                places: PlaceCounts::new(),
                raw_candidates: Vec::new(),
                trace,
                metadata: AnalysisMetadata {
                    duration: start.elapsed(),
                    segmentation: mode,
                    whitespace_aware: self.classifier.is_whitespace_aware(),
                    pos_available: false,
                    chars_processed: chars,
                    sentence_count: 0,
                },
            };
        }

        let sentences = self.tag(text, &mut trace);
        let lookup = sentences
            .as_ref()
            .map(|sentences| PosLookup::build(sentences, lexicon));

        let mut raw_candidates = Vec::new();
        if sentences.is_none() || mode.uses_char_dfa() {
            let segmenter = CharSegmenter::new(&self.classifier, lexicon);
            raw_candidates.extend(segmenter.segment(text, &mut trace));
        }
        if let Some(sentences) = sentences.as_ref().filter(|_| mode.uses_token_dfa()) {
            let segmenter = TokenSegmenter::new(lexicon);
            raw_candidates.extend(segmenter.segment(sentences, &mut trace));
        }

        let places = FilterPipeline::new(lexicon, lookup.as_ref()).run(&raw_candidates, &mut trace);

        trace.push(TraceEvent::ScanFinished {
            raw_candidates: raw_candidates.len(),
            places: places.len(),
        });

        let duration = start.elapsed();
        tracing::debug!(
            chars,
            mode = %mode,
            raw = raw_candidates.len(),
            places = places.len(),
            events = trace.len(),
            ?duration,
            "scan finished"
        );

        Analysis {
            metadata: AnalysisMetadata {
                duration,
                segmentation: mode,
                whitespace_aware: self.classifier.is_whitespace_aware(),
                pos_available: lookup.is_some(),
                chars_processed: chars,
                sentence_count: sentences.as_ref().map_or(0, Vec::len),
            },
            places,
            raw_candidates,
            trace,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ask the oracle for tags, recording which path was taken
    fn tag(&self, text: &str, trace: &mut TraceLog) -> Option<Vec<TaggedSentence>> {
        let Some(oracle) = self.oracle.as_ref() else {
            trace.push(TraceEvent::PosDegraded {
                reason: "POS evidence disabled".to_string(),
            });
            return None;
        };

        match oracle.tag(text) {
            Ok(sentences) => {
                trace.push(TraceEvent::PosTagged {
                    oracle: oracle.name().to_string(),
                    sentences: sentences.len(),
                    tokens: sentences.iter().map(Vec::len).sum(),
                });
                Some(sentences)
            }
            Err(e) => {
                tracing::warn!(
                    oracle = oracle.name(),
                    error = %e,
                    "POS oracle failed, using capitalization-only noun evidence"
                );
                trace.push(TraceEvent::PosDegraded {
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

impl std::fmt::Debug for PlaceFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceFinder")
            .field("config", &self.config)
            .field("oracle", &self.oracle.as_ref().map(|o| o.name().to_string()))
            .field("last_trace", &self.last_trace.len())
            .finish()
    }
}
