//! Message formatting and display.
//!
//! Status lines for the user, with quiet and verbose modes. Warnings go to
//! stderr; everything else goes to stdout.
//!
//! # Examples
//!
//! ```
//! use pdfprop::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("3 input files are given.");
//! ```

use std::io::{self, IsTerminal};

use crate::config::{ExtractConfig, MergeConfig};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Warning message.
    Warning,
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    /// Whether to suppress non-warning output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether stderr takes ANSI colours.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress everything except warnings
    /// * `verbose` - Show detail lines and numbered lists
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: io::stderr().is_terminal() && std::env::var("TERM").is_ok(),
        }
    }

    /// Print an informational line. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a warning, even in quiet mode.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Info => println!("{message}"),
            MessageLevel::Warning if self.colored => eprintln!("\x1b[33m⚠ {message}\x1b[0m"),
            MessageLevel::Warning => eprintln!("⚠ {message}"),
        }
    }

    /// Print a section header. Only shown in verbose mode.
    pub fn section(&self, title: &str) {
        if self.verbose {
            println!("\n{title}");
        }
    }

    /// Print a `label: value` detail line. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a numbered list item. Only shown in verbose mode.
    pub fn list_item(&self, index: usize, message: &str) {
        if self.verbose {
            println!("  {index}. {message}");
        }
    }

    /// Check if verbose output should be shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl From<&MergeConfig> for OutputFormatter {
    fn from(config: &MergeConfig) -> Self {
        Self::new(config.quiet, config.verbose)
    }
}

impl From<&ExtractConfig> for OutputFormatter {
    fn from(config: &ExtractConfig) -> Self {
        Self::new(config.quiet, config.verbose)
    }
}
