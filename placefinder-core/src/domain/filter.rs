//! Rule-based rejection of raw candidates
//!
//! Rules run in a fixed order and stop at the first rejection. Each raw
//! occurrence is judged on its own, so the final count of a phrase equals
//! the number of its occurrences that passed.

use crate::domain::lexicon::Lexicon;
use crate::domain::pos::PosLookup;
use crate::domain::trace::{TraceEvent, TraceLog};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Final mapping of surviving candidate to occurrence count
pub type PlaceCounts = BTreeMap<String, usize>;

/// Filter rules, in evaluation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    DuplicateWord,
    TooShort,
    CommonWord,
    LeadingCommonWord,
    TrailingConnector,
    NoNounEvidence,
}

impl FilterRule {
    pub const ORDER: [FilterRule; 6] = [
        FilterRule::DuplicateWord,
        FilterRule::TooShort,
        FilterRule::CommonWord,
        FilterRule::LeadingCommonWord,
        FilterRule::TrailingConnector,
        FilterRule::NoNounEvidence,
    ];
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterRule::DuplicateWord => "duplicate word",
            FilterRule::TooShort => "too short",
            FilterRule::CommonWord => "common word",
            FilterRule::LeadingCommonWord => "leading common word",
            FilterRule::TrailingConnector => "trailing connector",
            FilterRule::NoNounEvidence => "no noun evidence",
        };
        f.write_str(name)
    }
}

/// Outcome of filtering one raw occurrence
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected { rule: FilterRule, detail: String },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Ordered candidate filter
pub struct FilterPipeline<'a> {
    lexicon: &'a Lexicon,
    lookup: Option<&'a PosLookup>,
}

impl<'a> FilterPipeline<'a> {
    /// `lookup` of `None` switches noun evidence to the capitalization-only check
    pub fn new(lexicon: &'a Lexicon, lookup: Option<&'a PosLookup>) -> Self {
        Self { lexicon, lookup }
    }

    /// Filter every raw occurrence and count the survivors
    pub fn run(&self, raw_candidates: &[String], trace: &mut TraceLog) -> PlaceCounts {
        trace.push(TraceEvent::FilterStarted {
            raw_candidates: raw_candidates.to_vec(),
        });

        let mut places = PlaceCounts::new();
        for candidate in raw_candidates {
            let verdict = self.evaluate(candidate);
            if verdict.is_accepted() {
                *places.entry(candidate.clone()).or_insert(0) += 1;
            }
            tracing::trace!(candidate = %candidate, ?verdict, "filter decision");
            trace.push(TraceEvent::FilterDecision {
                candidate: candidate.clone(),
                verdict,
            });
        }

        trace.push(TraceEvent::FilterFinished {
            places: places.clone(),
        });
        places
    }

    /// Judge a single candidate against all rules in order
    pub fn evaluate(&self, candidate: &str) -> Verdict {
        let words: Vec<&str> = candidate.split_whitespace().collect();

        for rule in FilterRule::ORDER {
            if let Some(detail) = self.check(rule, candidate, &words) {
                return Verdict::Rejected { rule, detail };
            }
        }
        Verdict::Accepted
    }

    /// `Some(detail)` when `rule` rejects the candidate
    fn check(&self, rule: FilterRule, candidate: &str, words: &[&str]) -> Option<String> {
        match rule {
            FilterRule::DuplicateWord => {
                let mut seen = HashSet::new();
                words
                    .iter()
                    .find(|w| !seen.insert(**w))
                    .map(|w| format!("word '{w}' repeats"))
            }
            FilterRule::TooShort => {
                let len = candidate.chars().count();
                (len < 2).then(|| format!("{len} character(s)"))
            }
            FilterRule::CommonWord => match words {
                [only] if self.lexicon.is_common_word(only) => {
                    Some(format!("'{only}' is a common word"))
                }
                _ => None,
            },
            FilterRule::LeadingCommonWord => match words {
                [first, _, ..]
                    if self.lexicon.is_common_word(first) && first.to_lowercase() != "the" =>
                {
                    Some(format!("starts with common word '{first}'"))
                }
                _ => None,
            },
            FilterRule::TrailingConnector => match words {
                [_, .., last] if self.lexicon.is_connector(last) => {
                    Some(format!("ends with connector '{last}'"))
                }
                _ => None,
            },
            FilterRule::NoNounEvidence => {
                if words.iter().any(|w| self.is_noun_evidence(w)) {
                    None
                } else if self.lookup.is_some() {
                    Some("no capitalized noun-tagged word".to_string())
                } else {
                    Some("no capitalized word longer than one letter".to_string())
                }
            }
        }
    }

    fn is_noun_evidence(&self, word: &str) -> bool {
        if self.lexicon.is_connector(word) {
            return false;
        }
        if !word.chars().next().is_some_and(char::is_uppercase) {
            return false;
        }
        match self.lookup {
            Some(lookup) => lookup.class(word).is_some_and(|class| class.is_noun_like()),
            None => word.chars().count() > 1,
        }
    }
}
