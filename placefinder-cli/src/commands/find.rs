//! Find command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use placefinder_core::{Analysis, Config, Input, Lexicon, PlaceFinder, SegmentationMode};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// External lexicon file (TOML)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Candidate segmentation: character, token or hybrid
    #[arg(long, value_name = "MODE")]
    pub segmentation: Option<SegmentationMode>,

    /// Treat newlines and tabs as word separators
    #[arg(long)]
    pub whitespace_aware: bool,

    /// Ignore POS evidence (capitalization-only filtering)
    #[arg(long)]
    pub no_pos: bool,

    /// Include the full trace log (json format)
    #[arg(long)]
    pub trace: bool,

    /// Worker threads for multi-file runs (0 = all CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    include_trace: bool,
    pretty_json: bool,
    threads: usize,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting place extraction");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&file_config)?;
        let config = self.core_config(&file_config)?;

        let documents = self.analyze_inputs(&config, &settings)?;
        log::info!("Analyzed {} input(s)", documents.len());

        if settings.include_trace && settings.format != OutputFormat::Json {
            log::warn!("--trace is only rendered by the json format");
        }

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = Self::formatter(writer, &settings, documents.len() > 1);

        for (source, analysis) in &documents {
            formatter.format_document(source, analysis)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn settings(&self, file_config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&file_config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    file_config.output.default_format
                ))
            })?,
        };

        let threads = self
            .threads
            .unwrap_or(file_config.performance.worker_threads);

        Ok(Settings {
            format,
            include_trace: self.trace || file_config.output.include_trace,
            pretty_json: file_config.output.pretty_json,
            threads: if threads == 0 { num_cpus::get() } else { threads },
        })
    }

    /// Build the core configuration; flags override file values
    fn core_config(&self, file_config: &CliConfig) -> Result<Config> {
        let processing = &file_config.processing;
        let mut builder = Config::builder()
            .whitespace_aware(self.whitespace_aware || processing.whitespace_aware)
            .segmentation(self.segmentation.unwrap_or(processing.segmentation))
            .use_pos(!self.no_pos && processing.use_pos);

        if let Some(path) = &self.lexicon {
            let lexicon = Lexicon::from_file(path)
                .map_err(|e| CliError::LexiconError(e.to_string()))?;
            log::info!("Using lexicon '{}' from {}", lexicon.code(), path.display());
            builder = builder.lexicon(lexicon);
        }

        builder.build().map_err(|e| CliError::from(e).into())
    }

    fn analyze_inputs(&self, config: &Config, settings: &Settings) -> Result<Vec<(String, Analysis)>> {
        if self.input.iter().any(|i| i == STDIN_MARKER) {
            if self.input.len() > 1 {
                return Err(CliError::InvalidPattern(
                    "'-' (stdin) cannot be combined with other inputs".to_string(),
                )
                .into());
            }
            let text = FileReader::read_stdin()?;
            let analysis = Self::analyze_text(config, text)?;
            return Ok(vec![("<stdin>".to_string(), analysis)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to analyze", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let documents = if files.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(settings.threads)
                .build()
                .context("Failed to build thread pool")?;
            log::debug!("Using {} worker thread(s)", settings.threads);

            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| -> Result<(String, Analysis)> {
                        let analysis = Self::analyze_file(config, path)?;
                        progress.file_completed(&path.display().to_string());
                        Ok((path.display().to_string(), analysis))
                    })
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| -> Result<(String, Analysis)> {
                    Ok((path.display().to_string(), Self::analyze_file(config, path)?))
                })
                .collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(documents)
    }

    fn analyze_file(config: &Config, path: &Path) -> Result<Analysis> {
        log::debug!(
            "Analyzing {} ({} bytes)",
            path.display(),
            FileReader::file_size(path)?
        );
        let text = FileReader::read_text(path)?;
        Self::analyze_text(config, text).with_context(|| format!("While analyzing {}", path.display()))
    }

    /// One independent finder per input
    fn analyze_text(config: &Config, text: String) -> Result<Analysis> {
        let finder = PlaceFinder::with_config(config.clone()).map_err(CliError::from)?;
        let analysis = finder
            .process(Input::from_text(text))
            .map_err(CliError::from)?;
        log::debug!(
            "{} raw candidate(s), {} place(s) in {:?}",
            analysis.raw_candidates.len(),
            analysis.places.len(),
            analysis.metadata.duration
        );
        Ok(analysis)
    }

    fn formatter(
        writer: Box<dyn Write + Send + Sync>,
        settings: &Settings,
        multiple: bool,
    ) -> Box<dyn OutputFormatter> {
        match settings.format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(writer).with_source_headers(multiple))
            }
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .with_trace(settings.include_trace)
                    .with_pretty(settings.pretty_json),
            ),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
