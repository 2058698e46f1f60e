//! Domain layer for place-name candidate extraction
//!
//! Pure algorithmic pieces: character classification, the two segmenting
//! automata, part-of-speech evidence, the filter pipeline and the trace log.
//! Nothing here performs I/O apart from loading lexicon files on request.

pub mod classifier;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod pos;
pub mod segmenter;
pub mod token_dfa;
pub mod trace;

pub use classifier::{CharCategory, CharacterClassifier, StandardClassifier};
pub use error::{DomainError, OracleError};
pub use filter::{FilterPipeline, FilterRule, PlaceCounts, Verdict};
pub use lexicon::Lexicon;
pub use pos::{
    PosLookup, PosOracle, RuleTagger, StaticOracle, TagClass, TaggedSentence, TaggedToken,
    UnavailableOracle,
};
pub use segmenter::{CharAction, CharSegmenter, CharState};
pub use token_dfa::{TokenAction, TokenSegmenter, TokenState};
pub use trace::{TraceEvent, TraceLog};
