//! Deterministic lexicon-driven tagger
//!
//! Stands in for a statistical tagger when none is wired in. Closed-class
//! words come from the lexicon; everything else is tagged by shape.

use super::{PosOracle, TaggedSentence, TaggedToken};
use crate::domain::error::OracleError;
use crate::domain::lexicon::Lexicon;
use regex::Regex;
use std::sync::Arc;

/// Letter runs, digit runs, or a single other non-space character
const TOKEN_PATTERN: &str = r"\p{L}+|\p{N}+|[^\p{L}\p{N}\s]";

/// Built-in [`PosOracle`] using lexicon word lists and word shape
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: Arc<Lexicon>,
    token_pattern: Regex,
}

impl RuleTagger {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, OracleError> {
        let token_pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| OracleError::Unavailable(format!("invalid token pattern: {e}")))?;
        Ok(Self {
            lexicon,
            token_pattern,
        })
    }

    fn tag_token(&self, token: &str) -> String {
        if let Some(tag) = self.lexicon.closed_class_tag(token) {
            return tag.to_string();
        }

        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        if first.is_numeric() {
            return "CD".to_string();
        }
        if !first.is_alphabetic() {
            // Penn style: punctuation is its own tag
            return token.to_string();
        }
        if first.is_uppercase() {
            return "NNP".to_string();
        }

        let lower = token.to_lowercase();
        let char_count = lower.chars().count();
        let tag = if lower.ends_with("ly") && char_count > 3 {
            "RB"
        } else if lower.ends_with("ing") && char_count > 4 {
            "VBG"
        } else if lower.ends_with("ed") && char_count > 3 {
            "VBD"
        } else if lower.ends_with('s') && !lower.ends_with("ss") && char_count > 3 {
            "NNS"
        } else {
            "NN"
        };
        tag.to_string()
    }
}

impl PosOracle for RuleTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedSentence>, OracleError> {
        let mut sentences = Vec::new();

        for line in text.lines() {
            let mut current: TaggedSentence = Vec::new();

            for m in self.token_pattern.find_iter(line) {
                let token = m.as_str();
                let is_terminal = matches!(token, "." | "!" | "?");
                current.push(TaggedToken::new(token, self.tag_token(token)));

                if is_terminal {
                    sentences.push(std::mem::take(&mut current));
                }
            }

            if !current.is_empty() {
                sentences.push(current);
            }
        }

        Ok(sentences)
    }

    fn name(&self) -> &str {
        "rule-tagger"
    }
}
