//! Configuration module for pdfprop.
//!
//! CLI arguments are turned into one of two validated configurations:
//! - [`MergeConfig`] drives `combine`
//! - [`ExtractConfig`] drives `extract`
//!
//! Both are plain data; validation happens in `validate()` before any file
//! is touched.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{PdfPropError, Result};

/// How PDF names (dictionary keys and name values) are rendered in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    /// Bare names, e.g. `Title = ...` and `Subtype = Text`.
    #[default]
    Bare,
    /// Names keep their `/` prefix, e.g. `/Title = ...`.
    Prefixed,
}

impl NameStyle {
    /// Render a raw PDF name (without its `/`) in this style.
    pub fn render(&self, name: &str) -> String {
        match self {
            Self::Bare => name.to_string(),
            Self::Prefixed => format!("/{name}"),
        }
    }
}

/// Report serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Line-oriented `key = value` text report.
    #[default]
    Text,
    /// Pretty-printed JSON of the extracted info.
    Json,
}

impl FromStr for ReportFormat {
    type Err = PdfPropError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(PdfPropError::invalid_config(format!(
                "Invalid report format: {s}. Must be one of: text, json"
            ))),
        }
    }
}

/// Configuration for concatenating PDF files.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Input PDF file paths (in merge order).
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path. Overwritten if it exists.
    pub output: PathBuf,

    /// Compress object streams of the merged document before writing.
    pub compress: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl MergeConfig {
    /// Create a configuration with default output settings.
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            output: output.into(),
            compress: true,
            verbose: false,
            quiet: false,
        }
    }

    /// Validate the configuration.
    ///
    /// Input existence is not checked here; that happens in input order when
    /// the merge starts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PdfPropError::NoFilesToMerge);
        }

        if self.verbose && self.quiet {
            return Err(PdfPropError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        Ok(())
    }
}

/// Configuration for extracting document properties into a report.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Input PDF file path.
    pub input: PathBuf,

    /// Report output path. Must not exist yet.
    pub output: PathBuf,

    /// Collect per-page annotations as well as document properties.
    pub include_annotations: bool,

    /// Rendering of keys and name values.
    pub name_style: NameStyle,

    /// Report format.
    pub format: ReportFormat,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl ExtractConfig {
    /// Create a configuration with the canonical report layout.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        include_annotations: bool,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            include_annotations,
            name_style: NameStyle::default(),
            format: ReportFormat::default(),
            verbose: false,
            quiet: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if verbose and quiet are both set. Whether the report
    /// path is free is checked against the filesystem by `extract`.
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(PdfPropError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        Ok(())
    }
}
