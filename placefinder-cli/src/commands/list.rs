//! List command implementation

use super::ListCommands;
use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::ValueEnum;
use placefinder_core::Lexicon;

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        let lines = match self {
            ListCommands::Connectors => Self::lexicon()?
                .connectors()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ListCommands::CommonWords => Self::lexicon()?
                .common_words()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(|f| format!("{:<10} {}", f.name(), f.description()))
                .collect(),
        };
        Ok(lines)
    }

    fn lexicon() -> Result<Lexicon> {
        Lexicon::english().map_err(|e| CliError::LexiconError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_connectors() {
        let lines = ListCommands::Connectors.lines().unwrap();
        assert_eq!(lines, vec!["and", "for", "of", "the"]);
    }

    #[test]
    fn test_list_common_words_sorted() {
        let lines = ListCommands::CommonWords.lines().unwrap();
        assert!(lines.contains(&"Then".to_string()));
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("text"));
    }
}
