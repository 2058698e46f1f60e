//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod find;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find candidate place names in text files
    Find(find::FindArgs),

    /// Validate an external lexicon file
    Validate(validate::ValidateArgs),

    /// Write a lexicon template to start from
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List connector words of the built-in lexicon
    Connectors,

    /// List the common-word exclusion set of the built-in lexicon
    CommonWords,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Find(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
