//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Lexicon code for the new file
    #[arg(short = 'l', long, value_name = "CODE", default_value = "custom")]
    pub lexicon_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon template...");
        println!("  Lexicon code: {}", self.lexicon_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists to suit your corpus");
        println!("2. Validate your lexicon:");
        println!("   placefinder validate --lexicon {}", self.output.display());
        println!("3. Use it for extraction:");
        println!(
            "   placefinder find -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template lexicon content
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon for {code}

[metadata]
code = "{code}"
name = "Custom Lexicon"

# Lowercase words allowed inside a candidate phrase.
# A candidate may never end with one of these.
[connectors]
words = ["of", "the", "and", "for"]

# Words that are never a standalone place name. Compared exactly, so list
# the capitalized forms. Category names are arbitrary.
[exclusions]
pronouns = ["I", "He", "She", "It", "We", "They", "You"]
articles = ["The", "A", "An"]
prepositions = ["In", "On", "At", "From", "To", "Of"]
adverbs = ["Then", "Now", "Here", "There"]
months = ["January", "February", "March", "April", "June", "July", "August", "September", "October", "November", "December"]
days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
honorifics = ["Mr", "Mrs", "Ms", "Dr"]

# POS tag vocabulary. Tags in the first four lists count as noun evidence.
[tags]
proper_noun_singular = ["NNP"]
proper_noun_plural = ["NNPS"]
noun_singular = ["NN"]
noun_plural = ["NNS"]
preposition = ["IN", "TO"]
determiner = ["DT"]
conjunction = ["CC"]

# Closed-class words for the built-in tagger, keyed by tag (optional).
# A word may appear under one tag only.
[tagger]
DT = ["the", "a", "an"]
IN = ["of", "in", "on", "at", "from"]
TO = ["to"]
CC = ["and", "or", "but"]
PRP = ["i", "he", "she", "it", "we", "they", "you"]
RB = ["then", "now", "here", "there"]
"#,
            code = self.lexicon_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placefinder_core::Lexicon;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            lexicon_code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"test\""));
        assert!(template.contains("[connectors]"));
        assert!(template.contains("[exclusions]"));
        assert!(template.contains("[tags]"));
    }

    #[test]
    fn test_template_is_a_valid_lexicon() {
        let args = GenerateConfigArgs {
            lexicon_code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let lexicon = Lexicon::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(lexicon.code(), "test");
        assert!(lexicon.is_connector("of"));
        assert!(lexicon.is_common_word("Then"));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("lexicon.toml");

        let args = GenerateConfigArgs {
            lexicon_code: "test".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"test\""));
    }
}
