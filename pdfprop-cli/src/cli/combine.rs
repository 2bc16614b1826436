//! CLI argument parsing for pdfcombine.

use clap::Parser;
use std::path::PathBuf;

use pdfprop::config::MergeConfig;
use pdfprop::error::Result;

/// Concatenate PDF files into a single document.
///
/// Pages are appended in the order the inputs are given. Every input is
/// checked before anything is written, and an existing output file is
/// replaced.
#[derive(Parser, Debug)]
#[command(name = "pdfcombine")]
#[command(version)]
#[command(about = "Concatenate PDF files into a single document", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output PDF file path
    ///
    /// Overwritten if it already exists.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input PDF files to combine (in order)
    ///
    /// Example:
    ///   pdfcombine book.pdf chapter1.pdf chapter2.pdf
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Write the output without stream compression
    #[arg(long)]
    pub no_compress: bool,

    /// Verbose output - list merged files and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated `MergeConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn to_config(&self) -> Result<MergeConfig> {
        let mut config = MergeConfig::new(self.output.clone(), self.inputs.clone());
        config.compress = !self.no_compress;
        config.verbose = self.verbose;
        config.quiet = self.quiet;

        config.validate()?;

        Ok(config)
    }
}
