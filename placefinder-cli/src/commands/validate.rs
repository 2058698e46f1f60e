//! Validate command implementation

use anyhow::Result;
use clap::Args;
use placefinder_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                println!("  Connectors: {}", lexicon.connectors().join(", "));
                println!("  Common words: {}", lexicon.common_words().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(content: &str) -> (NamedTempFile, ValidateArgs) {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        let args = ValidateArgs {
            lexicon: temp_file.path().to_path_buf(),
        };
        (temp_file, args)
    }

    #[test]
    fn test_validate_valid_lexicon() {
        let (_file, args) = args_for(
            r#"
[metadata]
code = "xx"
name = "Test"

[connectors]
words = ["of"]

[exclusions]
pronouns = ["I"]

[tags]
proper_noun_singular = ["NNP"]
proper_noun_plural = ["NNPS"]
noun_singular = ["NN"]
noun_plural = ["NNS"]
"#,
        );
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_lexicon() {
        let (_file, args) = args_for(
            r#"
[metadata]
code = "xx"
name = "Test"

[connectors]
words = []

[exclusions]

[tags]
proper_noun_singular = ["NNP"]
proper_noun_plural = []
noun_singular = []
noun_plural = []
"#,
        );
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            lexicon: PathBuf::from("/nonexistent/lexicon.toml"),
        };
        assert!(args.execute().is_err());
    }
}
