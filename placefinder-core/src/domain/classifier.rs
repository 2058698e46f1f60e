//! Character classification for the segmenting automaton

use serde::Serialize;

/// Category of a single character as seen by the character DFA
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CharCategory {
    /// Unicode uppercase letter
    Upper,
    /// Unicode lowercase letter
    Lower,
    /// Word separator
    Space,
    /// Digits, punctuation, control characters and everything else
    Other,
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharCategory;
}

/// Default classifier built on Unicode case properties
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardClassifier {
    whitespace_aware: bool,
}

impl StandardClassifier {
    /// Only U+0020 counts as a space; newlines and tabs are delimiters
    pub fn new() -> Self {
        Self {
            whitespace_aware: false,
        }
    }

    /// Every Unicode whitespace character counts as a space
    pub fn whitespace_aware() -> Self {
        Self {
            whitespace_aware: true,
        }
    }

    pub fn is_whitespace_aware(&self) -> bool {
        self.whitespace_aware
    }
}

impl CharacterClassifier for StandardClassifier {
    #[inline]
    fn classify(&self, ch: char) -> CharCategory {
        if ch.is_uppercase() {
            CharCategory::Upper
        } else if ch.is_lowercase() {
            CharCategory::Lower
        } else if ch == ' ' || (self.whitespace_aware && ch.is_whitespace()) {
            CharCategory::Space
        } else {
            CharCategory::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classification() {
        let classifier = StandardClassifier::new();
        assert_eq!(classifier.classify('A'), CharCategory::Upper);
        assert_eq!(classifier.classify('z'), CharCategory::Lower);
        assert_eq!(classifier.classify(' '), CharCategory::Space);
        assert_eq!(classifier.classify('.'), CharCategory::Other);
        assert_eq!(classifier.classify('7'), CharCategory::Other);
        assert_eq!(classifier.classify('-'), CharCategory::Other);
    }

    #[test]
    fn test_newline_depends_on_variant() {
        let strict = StandardClassifier::new();
        let aware = StandardClassifier::whitespace_aware();

        for ch in ['\n', '\r', '\t'] {
            assert_eq!(strict.classify(ch), CharCategory::Other);
            assert_eq!(aware.classify(ch), CharCategory::Space);
        }
        assert_eq!(aware.classify(' '), CharCategory::Space);
        assert!(aware.is_whitespace_aware());
        assert!(!strict.is_whitespace_aware());
    }

    #[test]
    fn test_unicode_letters() {
        let classifier = StandardClassifier::new();
        assert_eq!(classifier.classify('É'), CharCategory::Upper);
        assert_eq!(classifier.classify('ß'), CharCategory::Lower);
        assert_eq!(classifier.classify('Ж'), CharCategory::Upper);
        // Caseless scripts have no case, so they delimit
        assert_eq!(classifier.classify('東'), CharCategory::Other);
        assert_eq!(classifier.classify('\u{0007}'), CharCategory::Other);
    }

    #[test]
    fn test_classification_is_stable() {
        let classifier = StandardClassifier::whitespace_aware();
        for ch in "Kuala Lumpur, 1957\n".chars() {
            assert_eq!(classifier.classify(ch), classifier.classify(ch));
        }
    }
}
