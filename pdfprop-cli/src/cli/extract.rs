//! CLI argument parsing for pdfprops.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use pdfprop::config::{ExtractConfig, NameStyle, ReportFormat};
use pdfprop::error::Result;

/// Extract PDF document properties into a report.
///
/// Writes the document-information entries, and optionally each page's
/// annotations, to a new report file. An existing report is never
/// overwritten.
#[derive(Parser, Debug)]
#[command(name = "pdfprops")]
#[command(version)]
#[command(about = "Extract PDF document properties into a report", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report file to create
    ///
    /// Must not exist yet.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Include per-page annotations in the report
    ///
    /// Type, Subtype and CreationDate are reported for every annotation,
    /// plus Contents for text annotations.
    #[arg(short = 'a', long)]
    pub include_annotations: bool,

    /// Keep the leading `/` on keys and name values
    #[arg(long)]
    pub raw_names: bool,

    /// Report format
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    #[arg(value_parser = ["text", "json"])]
    pub format: String,

    /// Verbose output - show a summary of what was extracted
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated `ExtractConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or validation fails.
    pub fn to_config(&self) -> Result<ExtractConfig> {
        let mut config = ExtractConfig::new(
            self.input.clone(),
            self.output.clone(),
            self.include_annotations,
        );
        config.format = ReportFormat::from_str(&self.format)?;
        config.name_style = if self.raw_names {
            NameStyle::Prefixed
        } else {
            NameStyle::Bare
        };
        config.verbose = self.verbose;
        config.quiet = self.quiet;

        config.validate()?;

        Ok(config)
    }
}
