//! Pre-flight path checks.
//!
//! Both operations refuse to start unless their paths are in the expected
//! state:
//! - every merge input must exist and be a regular file, checked in order
//! - an extraction report path must not exist yet
//!
//! These checks run before any PDF is loaded and before anything is written.
//!
//! # Examples
//!
//! ```no_run
//! use pdfprop::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = Validator::new();
//! validator
//!     .check_inputs(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])
//!     .await?;
//! validator.check_output_absent(&PathBuf::from("report.txt")).await?;
//! # Ok(())
//! # }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{PdfPropError, Result};

/// Validator for input and output paths.
#[derive(Debug, Clone, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Check that `path` exists and is a regular file.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if nothing exists at `path`, `NotAFile` if it
    /// is a directory or other non-file entry, and `Io` for any other
    /// metadata failure.
    pub async fn check_input(&self, path: &Path) -> Result<()> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PdfPropError::file_not_found(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };

        if !metadata.is_file() {
            return Err(PdfPropError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }

    /// Check every input in list order.
    ///
    /// Stops at the first failing path; paths after it are not examined.
    pub async fn check_inputs(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Err(PdfPropError::NoFilesToMerge);
        }

        for path in paths {
            log::debug!("checking input {}", path.display());
            self.check_input(path).await?;
        }

        Ok(())
    }

    /// Check that nothing exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns `OutputExists` naming `path` if an entry is already there.
    pub async fn check_output_absent(&self, path: &Path) -> Result<()> {
        if tokio::fs::try_exists(path).await? {
            return Err(PdfPropError::output_exists(path.to_path_buf()));
        }
        Ok(())
    }
}
