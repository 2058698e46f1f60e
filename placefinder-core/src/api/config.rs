//! Configuration API for place extraction

use crate::api::{Error, SegmentationMode};
use crate::domain::Lexicon;
use std::sync::Arc;

/// Default configuration constants
pub mod defaults {
    /// Embedded lexicon used when none is chosen
    pub const LEXICON: &str = "en";

    /// Treat only U+0020 as a word separator
    pub const WHITESPACE_AWARE: bool = false;

    /// Consult the POS oracle
    pub const USE_POS: bool = true;
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) lexicon: Arc<Lexicon>,
    pub(crate) whitespace_aware: bool,
    pub(crate) segmentation: SegmentationMode,
    pub(crate) use_pos: bool,
    pub(crate) max_input_chars: Option<usize>, // None = unbounded
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration with every default applied
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn whitespace_aware(&self) -> bool {
        self.whitespace_aware
    }

    pub fn segmentation(&self) -> SegmentationMode {
        self.segmentation
    }

    pub fn use_pos(&self) -> bool {
        self.use_pos
    }

    pub fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(limit) = self.max_input_chars {
            if limit == 0 {
                return Err(Error::Configuration(
                    "max_input_chars must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lexicon_code: Option<String>,
    lexicon: Option<Lexicon>,
    whitespace_aware: Option<bool>,
    segmentation: Option<SegmentationMode>,
    use_pos: Option<bool>,
    max_input_chars: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an embedded lexicon by code
    pub fn lexicon_code(mut self, code: impl Into<String>) -> Self {
        self.lexicon_code = Some(code.into());
        self
    }

    /// Use a custom lexicon; takes precedence over `lexicon_code`
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Treat every Unicode whitespace character as a word separator
    pub fn whitespace_aware(mut self, enabled: bool) -> Self {
        self.whitespace_aware = Some(enabled);
        self
    }

    /// Choose which automata produce candidates
    pub fn segmentation(mut self, mode: SegmentationMode) -> Self {
        self.segmentation = Some(mode);
        self
    }

    /// Enable or disable POS evidence
    pub fn use_pos(mut self, enabled: bool) -> Self {
        self.use_pos = Some(enabled);
        self
    }

    /// Reject inputs longer than `limit` characters (None = unbounded)
    pub fn max_input_chars(mut self, limit: Option<usize>) -> Self {
        self.max_input_chars = limit;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => {
                let code = self.lexicon_code.as_deref().unwrap_or(defaults::LEXICON);
                Lexicon::embedded(code)?
            }
        };

        let config = Config {
            lexicon: Arc::new(lexicon),
            whitespace_aware: self.whitespace_aware.unwrap_or(defaults::WHITESPACE_AWARE),
            segmentation: self.segmentation.unwrap_or_default(),
            use_pos: self.use_pos.unwrap_or(defaults::USE_POS),
            max_input_chars: self.max_input_chars,
        };

        config.validate()?;
        Ok(config)
    }
}
