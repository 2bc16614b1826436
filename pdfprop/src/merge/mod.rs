//! PDF concatenation.
//!
//! This module provides:
//! - Ordered existence checks of every input before any work
//! - Page-order-preserving concatenation
//! - Atomic writing of the result
//!
//! # Examples
//!
//! ```no_run
//! use pdfprop::config::MergeConfig;
//! use pdfprop::merge::combine;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MergeConfig::new(
//!     "merged.pdf",
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//! );
//! let summary = combine(&config).await?;
//! println!("Merged {} pages", summary.merge.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;
pub mod pages;

pub use merger::{MergeResult, MergeStatistics, Merger};
pub use pages::PageTree;

use crate::config::MergeConfig;
use crate::error::Result;
use crate::io::{PdfWriter, WriteOptions, WriteStatistics};
use crate::output::{OutputFormatter, display_merge_statistics};

/// Outcome of a completed combine run.
#[derive(Debug, Clone)]
pub struct CombineSummary {
    /// Statistics about loading and merging.
    pub merge: MergeStatistics,

    /// Statistics about writing the output.
    pub write: WriteStatistics,
}

/// Concatenate `config.inputs`, in order, into `config.output`.
///
/// Prints how many inputs were given before starting and the output path
/// once it is written. An existing output file is replaced.
///
/// # Errors
///
/// Returns `FileNotFound` naming the first missing input before anything is
/// loaded or written; load, merge and write failures propagate as-is.
pub async fn combine(config: &MergeConfig) -> Result<CombineSummary> {
    config.validate()?;

    let formatter = OutputFormatter::from(config);
    formatter.info(&format!("{} input files are given.", config.inputs.len()));

    let result = Merger::new().merge(config).await?;
    for (index, path) in result.merged_files.iter().enumerate() {
        formatter.list_item(index + 1, &path.display().to_string());
    }
    if config.inputs.contains(&config.output) {
        formatter.warning(&format!(
            "{} is also an input and will be replaced",
            config.output.display()
        ));
    }

    let writer = PdfWriter::with_options(WriteOptions {
        compress: config.compress,
        ..Default::default()
    });
    let write = writer.save_with_stats(result.document, &config.output).await?;

    formatter.info(&format!("Combined PDF saved as {}", config.output.display()));
    display_merge_statistics(&formatter, &result.statistics, &write);
    log::info!(
        "combined {} files ({} pages) into {}",
        result.statistics.files_merged,
        result.statistics.total_pages,
        config.output.display()
    );

    Ok(CombineSummary {
        merge: result.statistics,
        write,
    })
}
