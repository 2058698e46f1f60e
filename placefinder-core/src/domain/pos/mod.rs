//! Part-of-speech evidence consumed by the token automaton and the filters
//!
//! The tagger itself is an external collaborator behind [`PosOracle`]. This
//! module defines the tagged-token model, the token → tag lookup with its
//! proper-noun precedence rule, and the oracles shipped with the crate.

mod rule_tagger;

pub use rule_tagger::RuleTagger;

use crate::domain::error::OracleError;
use crate::domain::lexicon::Lexicon;
use serde::Serialize;
use std::collections::HashMap;

/// Coarse class of a POS tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TagClass {
    ProperNounSingular,
    ProperNounPlural,
    NounSingular,
    NounPlural,
    Preposition,
    Determiner,
    Conjunction,
    Other,
}

impl TagClass {
    /// Proper or common noun, singular or plural
    pub fn is_noun_like(self) -> bool {
        matches!(
            self,
            TagClass::ProperNounSingular
                | TagClass::ProperNounPlural
                | TagClass::NounSingular
                | TagClass::NounPlural
        )
    }

    pub fn is_proper_noun(self) -> bool {
        matches!(
            self,
            TagClass::ProperNounSingular | TagClass::ProperNounPlural
        )
    }

    /// Tags that let a connector word extend a token-level candidate
    pub fn is_linking(self) -> bool {
        matches!(
            self,
            TagClass::Preposition | TagClass::Determiner | TagClass::Conjunction
        )
    }
}

/// A token with the raw tag the oracle assigned
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// Ordered tokens of one sentence (or line)
pub type TaggedSentence = Vec<TaggedToken>;

/// Source of part-of-speech tags
pub trait PosOracle: Send + Sync {
    /// Tag `text`, returning sentences of (token, tag) pairs in text order.
    ///
    /// Must return the same result for identical input.
    fn tag(&self, text: &str) -> Result<Vec<TaggedSentence>, OracleError>;

    /// Short name used in trace output
    fn name(&self) -> &str;
}

/// Oracle returning a fixed, precomputed tag sequence
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    sentences: Vec<TaggedSentence>,
}

impl StaticOracle {
    pub fn new(sentences: Vec<TaggedSentence>) -> Self {
        Self { sentences }
    }

    /// Build from `(token, tag)` string pairs, one slice per sentence
    pub fn from_pairs(sentences: &[&[(&str, &str)]]) -> Self {
        Self::new(
            sentences
                .iter()
                .map(|s| s.iter().map(|(t, g)| TaggedToken::new(*t, *g)).collect())
                .collect(),
        )
    }
}

impl PosOracle for StaticOracle {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedSentence>, OracleError> {
        Ok(self.sentences.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Oracle that always fails, forcing the capitalization-only path
#[derive(Debug, Clone)]
pub struct UnavailableOracle {
    reason: String,
}

impl UnavailableOracle {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PosOracle for UnavailableOracle {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedSentence>, OracleError> {
        Err(OracleError::Unavailable(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Token → tag mapping built once per analysed text
#[derive(Debug, Clone, Default)]
pub struct PosLookup {
    tags: HashMap<String, (String, TagClass)>,
}

impl PosLookup {
    /// Build from tagged sentences.
    ///
    /// The first tag seen for a token is kept, unless a later occurrence
    /// carries a proper-noun tag and the recorded one does not.
    pub fn build(sentences: &[TaggedSentence], lexicon: &Lexicon) -> Self {
        let mut lookup = Self::default();
        for token in sentences.iter().flatten() {
            lookup.insert(&token.token, &token.tag, lexicon.classify_tag(&token.tag));
        }
        lookup
    }

    fn insert(&mut self, token: &str, tag: &str, class: TagClass) {
        let keep_existing = self
            .tags
            .get(token)
            .is_some_and(|(_, existing)| existing.is_proper_noun() || !class.is_proper_noun());
        if !keep_existing {
            self.tags
                .insert(token.to_string(), (tag.to_string(), class));
        }
    }

    /// Raw tag recorded for a token
    pub fn tag(&self, token: &str) -> Option<&str> {
        self.tags.get(token).map(|(tag, _)| tag.as_str())
    }

    /// Class of the tag recorded for a token
    pub fn class(&self, token: &str) -> Option<TagClass> {
        self.tags.get(token).map(|(_, class)| *class)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
