use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    pub connectors: ConnectorConfig,
    pub exclusions: ExclusionConfig,
    pub tags: TagConfig,
    #[serde(default)]
    pub tagger: TaggerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionConfig {
    #[serde(flatten)]
    pub categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagConfig {
    pub proper_noun_singular: Vec<String>,
    pub proper_noun_plural: Vec<String>,
    pub noun_singular: Vec<String>,
    pub noun_plural: Vec<String>,
    #[serde(default)]
    pub preposition: Vec<String>,
    #[serde(default)]
    pub determiner: Vec<String>,
    #[serde(default)]
    pub conjunction: Vec<String>,
}

/// Closed-class word lists keyed by the tag they receive
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaggerConfig {
    #[serde(flatten)]
    pub closed_class: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "xx"
            name = "Test"

            [connectors]
            words = ["of", "the"]

            [exclusions]
            pronouns = ["I", "He"]
            months = ["June"]

            [tags]
            proper_noun_singular = ["NNP"]
            proper_noun_plural = ["NNPS"]
            noun_singular = ["NN"]
            noun_plural = ["NNS"]
            preposition = ["IN"]

            [tagger]
            DT = ["the"]
            "PRP$" = ["my"]
        "#;

        let config: LexiconConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.connectors.words.len(), 2);
        assert_eq!(config.exclusions.categories["pronouns"].len(), 2);
        assert!(config.tags.determiner.is_empty());
        assert_eq!(config.tagger.closed_class["PRP$"], vec!["my".to_string()]);
    }

    #[test]
    fn test_tagger_section_is_optional() {
        let toml_str = r#"
            [metadata]
            code = "xx"
            name = "Test"

            [connectors]
            words = ["of"]

            [exclusions]

            [tags]
            proper_noun_singular = ["NNP"]
            proper_noun_plural = ["NNPS"]
            noun_singular = ["NN"]
            noun_plural = ["NNS"]
        "#;

        let config: LexiconConfig = toml::from_str(toml_str).unwrap();
        assert!(config.tagger.closed_class.is_empty());
        assert!(config.exclusions.categories.is_empty());
    }
}
