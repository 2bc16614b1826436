//! Output formatting and display for pdfprop.
//!
//! This module handles all user-facing output:
//! - Formatted status messages
//! - Quiet and verbose modes
//! - Summary reports after a combine or extract run

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::extract::PdfInfo;
use crate::io::WriteStatistics;
use crate::merge::MergeStatistics;

/// Display merge and write statistics (verbose mode only).
pub fn display_merge_statistics(
    formatter: &OutputFormatter,
    merge: &MergeStatistics,
    write: &WriteStatistics,
) {
    if !formatter.is_verbose() {
        return;
    }

    formatter.section("Statistics");
    formatter.detail("Input files", &merge.files_merged.to_string());
    formatter.detail("Total pages", &merge.total_pages.to_string());
    formatter.detail("Input size", &merge.format_input_size());
    formatter.detail("Output size", &write.format_file_size());
    formatter.detail(
        "Load time",
        &format!("{:.2}s", merge.load_time.as_secs_f64()),
    );
    formatter.detail(
        "Merge time",
        &format!("{:.2}s", merge.merge_time.as_secs_f64()),
    );
    formatter.detail(
        "Write time",
        &format!("{:.2}s", write.write_time.as_secs_f64()),
    );
    formatter.detail("Compression", if write.compressed { "Yes" } else { "No" });
}

/// Display what an extraction collected (verbose mode only).
pub fn display_extract_summary(formatter: &OutputFormatter, info: &PdfInfo) {
    if !formatter.is_verbose() {
        return;
    }

    formatter.section("Extracted");
    formatter.detail("Source", &info.file_path.display().to_string());
    formatter.detail("Properties", &info.properties.len().to_string());
    formatter.detail("Annotations", &info.annotations.len().to_string());
}
