//! Character-level DFA that cuts text into raw place-name candidates
//!
//! The automaton approximates "runs of capitalized words, optionally joined
//! by connector words". Any lowercase word outside the connector set, and any
//! delimiter character, closes the current run. Runs are emitted in discovery
//! order and may repeat verbatim.

use crate::domain::classifier::{CharCategory, CharacterClassifier};
use crate::domain::lexicon::Lexicon;
use crate::domain::trace::{TraceEvent, TraceLog};
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// States of the character automaton
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharState {
    /// Outside any candidate
    Start,
    /// First (capital) letter of a word seen
    Capital,
    /// Inside a word of two or more letters
    InWord,
    /// Whitespace after at least one completed word
    Space,
    /// Accumulating a lowercase word that may be a connector
    Connecting,
}

impl fmt::Display for CharState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharState::Start => "START",
            CharState::Capital => "CAPITAL",
            CharState::InWord => "IN_WORD",
            CharState::Space => "SPACE",
            CharState::Connecting => "CONNECTING",
        };
        f.write_str(name)
    }
}

/// What the automaton did on one step
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharAction {
    StartWord,
    AppendLetter,
    PushWord,
    AbsorbSpace,
    StartConnector,
    AppendConnector,
    /// Connector joined the phrase
    AcceptConnector { word: String },
    /// Lowercase word outside a phrase, tested against the connector set
    CheckConnector { word: String, is_connector: bool },
    /// Lowercase non-connector closed the phrase
    RejectConnector {
        word: String,
        candidate: Option<String>,
    },
    Finalize { candidate: Option<String> },
    /// Single capital letter hit a delimiter and was dropped
    DiscardSingleLetter {
        letter: String,
        candidate: Option<String>,
    },
    DiscardPending,
    Ignore,
}

impl fmt::Display for CharAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn emitted(candidate: &Option<String>) -> String {
            match candidate {
                Some(c) => format!("emit '{c}'"),
                None => "nothing buffered".to_string(),
            }
        }

        match self {
            CharAction::StartWord => write!(f, "start word"),
            CharAction::AppendLetter => write!(f, "append letter"),
            CharAction::PushWord => write!(f, "push word to phrase"),
            CharAction::AbsorbSpace => write!(f, "absorb space"),
            CharAction::StartConnector => write!(f, "start connector"),
            CharAction::AppendConnector => write!(f, "append to connector"),
            CharAction::AcceptConnector { word } => write!(f, "accept connector '{word}'"),
            CharAction::CheckConnector { word, is_connector } => {
                write!(f, "'{word}' outside phrase (connector: {is_connector})")
            }
            CharAction::RejectConnector { word, candidate } => {
                write!(f, "'{word}' is not a connector, {}", emitted(candidate))
            }
            CharAction::Finalize { candidate } => write!(f, "finalize, {}", emitted(candidate)),
            CharAction::DiscardSingleLetter { letter, candidate } => {
                write!(f, "drop single letter '{letter}', {}", emitted(candidate))
            }
            CharAction::DiscardPending => write!(f, "discard pending buffers"),
            CharAction::Ignore => write!(f, "ignore"),
        }
    }
}

/// Buffers owned by one scan
#[derive(Debug, Default)]
struct ScanBuffers {
    word: String,
    phrase: SmallVec<[String; 4]>,
    connector: String,
    candidates: Vec<String>,
}

impl ScanBuffers {
    fn push_word(&mut self) {
        if !self.word.is_empty() {
            self.phrase.push(std::mem::take(&mut self.word));
        }
    }

    /// Flush the pending word, emit the joined phrase if non-empty, clear
    /// every buffer.
    fn finalize(&mut self) -> Option<String> {
        self.push_word();
        let joined = self.phrase.join(" ");
        self.phrase.clear();
        self.word.clear();
        self.connector.clear();

        if joined.is_empty() {
            None
        } else {
            self.candidates.push(joined.clone());
            Some(joined)
        }
    }

    fn phrase_snapshot(&self) -> String {
        self.phrase.join(" ")
    }
}

/// Character DFA segmenter
pub struct CharSegmenter<'a> {
    classifier: &'a dyn CharacterClassifier,
    lexicon: &'a Lexicon,
}

impl<'a> CharSegmenter<'a> {
    pub fn new(classifier: &'a dyn CharacterClassifier, lexicon: &'a Lexicon) -> Self {
        Self {
            classifier,
            lexicon,
        }
    }

    /// Scan `text` and return raw candidates in discovery order.
    ///
    /// Every step is appended to `trace`, followed by one `EndOfInput` event.
    pub fn segment(&self, text: &str, trace: &mut TraceLog) -> Vec<String> {
        let mut state = CharState::Start;
        let mut buffers = ScanBuffers::default();

        for (position, ch) in text.chars().enumerate() {
            let category = self.classifier.classify(ch);
            let (next, action) = self.step(state, category, ch, &mut buffers);

            trace.push(TraceEvent::CharStep {
                position,
                ch,
                category,
                from: state,
                to: next,
                action,
                phrase: buffers.phrase_snapshot(),
                word: buffers.word.clone(),
                connector: buffers.connector.clone(),
            });
            state = next;
        }

        let action = self.end_of_input(state, &mut buffers);
        trace.push(TraceEvent::EndOfInput {
            from: state,
            to: CharState::Start,
            action,
        });

        buffers.candidates
    }

    fn step(
        &self,
        state: CharState,
        category: CharCategory,
        ch: char,
        buffers: &mut ScanBuffers,
    ) -> (CharState, CharAction) {
        use CharCategory::*;

        match state {
            CharState::Start => match category {
                Upper => {
                    buffers.connector.clear();
                    buffers.word.push(ch);
                    (CharState::Capital, CharAction::StartWord)
                }
                Lower => {
                    let action = if buffers.connector.is_empty() {
                        CharAction::StartConnector
                    } else {
                        CharAction::AppendConnector
                    };
                    buffers.connector.push(ch);
                    (CharState::Start, action)
                }
                Space => {
                    if buffers.connector.is_empty() {
                        return (CharState::Start, CharAction::Ignore);
                    }
                    let word = std::mem::take(&mut buffers.connector);
                    let is_connector = self.lexicon.is_connector(&word);
                    (
                        CharState::Start,
                        CharAction::CheckConnector { word, is_connector },
                    )
                }
                Other => {
                    let pending = !buffers.connector.is_empty()
                        || !buffers.word.is_empty()
                        || !buffers.phrase.is_empty();
                    buffers.connector.clear();
                    buffers.word.clear();
                    buffers.phrase.clear();
                    let action = if pending {
                        CharAction::DiscardPending
                    } else {
                        CharAction::Ignore
                    };
                    (CharState::Start, action)
                }
            },

            CharState::Capital => match category {
                Upper | Lower => {
                    buffers.word.push(ch);
                    (CharState::InWord, CharAction::AppendLetter)
                }
                Space => {
                    buffers.push_word();
                    (CharState::Space, CharAction::PushWord)
                }
                Other => {
                    if buffers.word.chars().count() > 1 {
                        let candidate = buffers.finalize();
                        (CharState::Start, CharAction::Finalize { candidate })
                    } else {
                        let letter = std::mem::take(&mut buffers.word);
                        let candidate = buffers.finalize();
                        (
                            CharState::Start,
                            CharAction::DiscardSingleLetter { letter, candidate },
                        )
                    }
                }
            },

            CharState::InWord => match category {
                Upper | Lower => {
                    buffers.word.push(ch);
                    (CharState::InWord, CharAction::AppendLetter)
                }
                Space => {
                    buffers.push_word();
                    (CharState::Space, CharAction::PushWord)
                }
                Other => {
                    let candidate = buffers.finalize();
                    (CharState::Start, CharAction::Finalize { candidate })
                }
            },

            CharState::Space => match category {
                Upper => {
                    buffers.word.push(ch);
                    (CharState::Capital, CharAction::StartWord)
                }
                Lower => {
                    buffers.connector.push(ch);
                    (CharState::Connecting, CharAction::StartConnector)
                }
                Space => (CharState::Space, CharAction::AbsorbSpace),
                Other => {
                    let candidate = buffers.finalize();
                    (CharState::Start, CharAction::Finalize { candidate })
                }
            },

            CharState::Connecting => match category {
                Upper | Lower => {
                    buffers.connector.push(ch);
                    (CharState::Connecting, CharAction::AppendConnector)
                }
                Space => {
                    let word = std::mem::take(&mut buffers.connector);
                    if self.lexicon.is_connector(&word) {
                        buffers.phrase.push(word.clone());
                        (CharState::Space, CharAction::AcceptConnector { word })
                    } else {
                        let candidate = buffers.finalize();
                        (
                            CharState::Start,
                            CharAction::RejectConnector { word, candidate },
                        )
                    }
                }
                Other => {
                    buffers.connector.clear();
                    let candidate = buffers.finalize();
                    (CharState::Start, CharAction::Finalize { candidate })
                }
            },
        }
    }

    fn end_of_input(&self, state: CharState, buffers: &mut ScanBuffers) -> CharAction {
        match state {
            CharState::Start => {
                let pending = !buffers.connector.is_empty();
                buffers.connector.clear();
                if pending {
                    CharAction::DiscardPending
                } else {
                    CharAction::Ignore
                }
            }
            CharState::Connecting => {
                let word = std::mem::take(&mut buffers.connector);
                if self.lexicon.is_connector(&word) {
                    buffers.phrase.push(word);
                }
                let candidate = buffers.finalize();
                CharAction::Finalize { candidate }
            }
            CharState::Capital | CharState::InWord | CharState::Space => {
                let candidate = buffers.finalize();
                CharAction::Finalize { candidate }
            }
        }
    }
}
