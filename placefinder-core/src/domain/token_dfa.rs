//! Token-level automaton over POS-tagged sentences
//!
//! Builds candidates directly from the tagged stream: capitalized noun-like
//! tokens start and extend a candidate, connector words tagged as linking
//! parts of speech may join two of them, and prepositions only set up an
//! expectation. Sentence ends are hard delimiters.

use crate::domain::lexicon::Lexicon;
use crate::domain::pos::{TagClass, TaggedSentence, TaggedToken};
use crate::domain::trace::{TraceEvent, TraceLog};
use serde::Serialize;
use std::fmt;

/// States of the token automaton
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenState {
    Start,
    InPlace,
    AfterPrep,
}

impl fmt::Display for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenState::Start => "START",
            TokenState::InPlace => "IN_PLACE",
            TokenState::AfterPrep => "AFTER_PREP",
        };
        f.write_str(name)
    }
}

/// What the token automaton did with one token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenAction {
    StartCandidate,
    ExtendCandidate,
    /// Connector held until a noun-like token confirms it
    HoldConnector,
    EnterPreposition,
    HoldPreposition,
    Finalize { candidate: Option<String> },
    AbandonPreposition,
    Ignore,
}

impl fmt::Display for TokenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenAction::StartCandidate => write!(f, "start candidate"),
            TokenAction::ExtendCandidate => write!(f, "extend candidate"),
            TokenAction::HoldConnector => write!(f, "hold connector"),
            TokenAction::EnterPreposition => write!(f, "preposition, expect place"),
            TokenAction::HoldPreposition => write!(f, "still expecting place"),
            TokenAction::Finalize { candidate: Some(c) } => write!(f, "finalize, emit '{c}'"),
            TokenAction::Finalize { candidate: None } => write!(f, "finalize, nothing buffered"),
            TokenAction::AbandonPreposition => write!(f, "no place after preposition"),
            TokenAction::Ignore => write!(f, "ignore"),
        }
    }
}

/// How one token can participate in a candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenRole {
    /// Capitalized and tagged noun-like
    PlaceWord,
    /// Connector word with a preposition/determiner/conjunction tag
    Connector { preposition: bool },
    Preposition,
    Determiner,
    Other,
}

#[derive(Debug, Default)]
struct TokenBuffers {
    words: Vec<String>,
    pending: Vec<String>,
    candidates: Vec<String>,
}

impl TokenBuffers {
    fn finalize(&mut self) -> Option<String> {
        self.pending.clear();
        let joined = self.words.join(" ");
        self.words.clear();

        if joined.is_empty() {
            None
        } else {
            self.candidates.push(joined.clone());
            Some(joined)
        }
    }

    fn snapshot(&self) -> String {
        self.words
            .iter()
            .chain(self.pending.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Token DFA segmenter
pub struct TokenSegmenter<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TokenSegmenter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Walk every sentence and return candidates in discovery order
    pub fn segment(&self, sentences: &[TaggedSentence], trace: &mut TraceLog) -> Vec<String> {
        let mut buffers = TokenBuffers::default();

        for (index, sentence) in sentences.iter().enumerate() {
            let mut state = TokenState::Start;

            for token in sentence {
                let role = self.role(token);
                let (next, action) = Self::step(state, role, token, &mut buffers);

                trace.push(TraceEvent::TokenStep {
                    sentence: index,
                    token: token.token.clone(),
                    tag: token.tag.clone(),
                    from: state,
                    to: next,
                    action,
                    buffer: buffers.snapshot(),
                });
                state = next;
            }

            let candidate = buffers.finalize();
            trace.push(TraceEvent::SentenceBoundary {
                sentence: index,
                from: state,
                candidate,
            });
        }

        buffers.candidates
    }

    fn role(&self, token: &TaggedToken) -> TokenRole {
        let class = self.lexicon.classify_tag(&token.tag);
        let capitalized = token.token.chars().next().is_some_and(char::is_uppercase);

        if capitalized && class.is_noun_like() {
            TokenRole::PlaceWord
        } else if class.is_linking() && self.lexicon.is_connector(&token.token) {
            TokenRole::Connector {
                preposition: class == TagClass::Preposition,
            }
        } else if class == TagClass::Preposition {
            TokenRole::Preposition
        } else if class == TagClass::Determiner {
            TokenRole::Determiner
        } else {
            TokenRole::Other
        }
    }

    fn step(
        state: TokenState,
        role: TokenRole,
        token: &TaggedToken,
        buffers: &mut TokenBuffers,
    ) -> (TokenState, TokenAction) {
        match state {
            TokenState::Start => match role {
                TokenRole::PlaceWord => {
                    buffers.words.push(token.token.clone());
                    (TokenState::InPlace, TokenAction::StartCandidate)
                }
                TokenRole::Preposition | TokenRole::Connector { preposition: true } => {
                    (TokenState::AfterPrep, TokenAction::EnterPreposition)
                }
                _ => (TokenState::Start, TokenAction::Ignore),
            },

            TokenState::InPlace => match role {
                TokenRole::PlaceWord => {
                    let pending = std::mem::take(&mut buffers.pending);
                    buffers.words.extend(pending);
                    buffers.words.push(token.token.clone());
                    (TokenState::InPlace, TokenAction::ExtendCandidate)
                }
                TokenRole::Connector { .. } => {
                    buffers.pending.push(token.token.clone());
                    (TokenState::InPlace, TokenAction::HoldConnector)
                }
                TokenRole::Preposition => {
                    let candidate = buffers.finalize();
                    (TokenState::AfterPrep, TokenAction::Finalize { candidate })
                }
                TokenRole::Determiner | TokenRole::Other => {
                    let candidate = buffers.finalize();
                    (TokenState::Start, TokenAction::Finalize { candidate })
                }
            },

            TokenState::AfterPrep => match role {
                TokenRole::PlaceWord => {
                    buffers.words.push(token.token.clone());
                    (TokenState::InPlace, TokenAction::StartCandidate)
                }
                TokenRole::Preposition | TokenRole::Connector { .. } | TokenRole::Determiner => {
                    (TokenState::AfterPrep, TokenAction::HoldPreposition)
                }
                TokenRole::Other => (TokenState::Start, TokenAction::AbandonPreposition),
            },
        }
    }
}
