//! Word lists and tag vocabulary driving segmentation and filtering
//!
//! A [`Lexicon`] bundles everything the automata and the filter pipeline
//! consult by word: the connector set, the common-word exclusion set, the
//! POS tag vocabulary and the closed-class lists of the built-in tagger.
//! The English lexicon is embedded at compile time; external lexicons are
//! loaded from TOML files with the same layout.

mod loader;
pub mod types;

pub use loader::{get_lexicon_config, list_available_lexicons};
pub use types::LexiconConfig;

use crate::domain::error::DomainError;
use crate::domain::pos::TagClass;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

/// Runtime lexicon built from a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    connectors: HashSet<String>,
    exclusions: HashSet<String>,
    tag_classes: HashMap<String, TagClass>,
    closed_class: HashMap<String, String>,
}

impl Lexicon {
    /// Load an embedded lexicon by code
    pub fn embedded(code: &str) -> Result<Self, DomainError> {
        Self::from_config(get_lexicon_config(code)?)
    }

    /// The embedded English lexicon
    pub fn english() -> Result<Self, DomainError> {
        Self::embedded("en")
    }

    /// Load and validate a lexicon from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigurationError(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            DomainError::ConfigurationError(msg) => DomainError::ConfigurationError(format!(
                "{} (in '{}')",
                msg,
                path.display()
            )),
            other => other,
        })
    }

    /// Parse and validate a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let config: LexiconConfig = toml::from_str(content)
            .map_err(|e| DomainError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
        Self::from_config(&config)
    }

    /// Build a lexicon from parsed configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, DomainError> {
        validate(config)?;

        let connectors = config
            .connectors
            .words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        let exclusions = config
            .exclusions
            .categories
            .values()
            .flatten()
            .cloned()
            .collect();

        let tags = &config.tags;
        let mut tag_classes = HashMap::new();
        for (list, class) in [
            (&tags.proper_noun_singular, TagClass::ProperNounSingular),
            (&tags.proper_noun_plural, TagClass::ProperNounPlural),
            (&tags.noun_singular, TagClass::NounSingular),
            (&tags.noun_plural, TagClass::NounPlural),
            (&tags.preposition, TagClass::Preposition),
            (&tags.determiner, TagClass::Determiner),
            (&tags.conjunction, TagClass::Conjunction),
        ] {
            for tag in list {
                tag_classes.insert(tag.clone(), class);
            }
        }

        let mut closed_class = HashMap::new();
        for (tag, words) in &config.tagger.closed_class {
            for word in words {
                closed_class.insert(word.to_lowercase(), tag.clone());
            }
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            connectors,
            exclusions,
            tag_classes,
            closed_class,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive connector membership
    pub fn is_connector(&self, word: &str) -> bool {
        self.connectors.contains(&word.to_lowercase())
    }

    /// Exact, case-sensitive exclusion membership
    pub fn is_common_word(&self, word: &str) -> bool {
        self.exclusions.contains(word)
    }

    /// Classify a raw tag string against this lexicon's vocabulary
    pub fn classify_tag(&self, tag: &str) -> TagClass {
        self.tag_classes.get(tag).copied().unwrap_or(TagClass::Other)
    }

    /// Closed-class tag for a word, matched on its lowercase form
    ///
    /// All-caps words of two or more letters are acronyms ("US", "IT") and
    /// never match.
    pub fn closed_class_tag(&self, word: &str) -> Option<&str> {
        if is_acronym(word) {
            return None;
        }
        self.closed_class
            .get(&word.to_lowercase())
            .map(String::as_str)
    }

    /// Connector words, sorted
    pub fn connectors(&self) -> Vec<&str> {
        let sorted: BTreeSet<&str> = self.connectors.iter().map(String::as_str).collect();
        sorted.into_iter().collect()
    }

    /// Common-word exclusions, sorted
    pub fn common_words(&self) -> Vec<&str> {
        let sorted: BTreeSet<&str> = self.exclusions.iter().map(String::as_str).collect();
        sorted.into_iter().collect()
    }
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(char::is_uppercase)
}

fn validate(config: &LexiconConfig) -> Result<(), DomainError> {
    if config.metadata.code.trim().is_empty() {
        return Err(DomainError::InvalidLexicon(
            "metadata.code must not be empty".into(),
        ));
    }

    if config.connectors.words.is_empty() {
        return Err(DomainError::InvalidLexicon(
            "connectors.words must not be empty".into(),
        ));
    }

    if let Some(bad) = config
        .connectors
        .words
        .iter()
        .find(|w| w.is_empty() || !w.chars().all(char::is_lowercase))
    {
        return Err(DomainError::InvalidLexicon(format!(
            "connector '{bad}' must be a non-empty lowercase word"
        )));
    }

    let tags = &config.tags;
    if tags.proper_noun_singular.is_empty()
        && tags.proper_noun_plural.is_empty()
        && tags.noun_singular.is_empty()
        && tags.noun_plural.is_empty()
    {
        return Err(DomainError::InvalidLexicon(
            "at least one noun tag must be configured".into(),
        ));
    }

    let mut seen: HashMap<String, &str> = HashMap::new();
    for (tag, words) in &config.tagger.closed_class {
        for word in words {
            if let Some(previous) = seen.insert(word.to_lowercase(), tag.as_str()) {
                return Err(DomainError::InvalidLexicon(format!(
                    "tagger word '{word}' listed under both {previous} and {tag}"
                )));
            }
        }
    }

    Ok(())
}
