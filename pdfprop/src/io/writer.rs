//! Output writing.
//!
//! Two writers live here:
//! - [`PdfWriter`] saves a merged document atomically (write to a temp
//!   file in the destination directory, then move it over the destination)
//! - [`ReportWriter`] creates a report file that must not exist yet
//!
//! # Examples
//!
//! ```no_run
//! use pdfprop::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(doc, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tokio::task;

use crate::error::{PdfPropError, Result};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Compress the PDF before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
///
/// Documents are serialized into an anonymous temp file in the destination
/// directory and then moved over the destination, so only `path` itself is
/// ever replaced.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF document, replacing any existing file at `path`.
    pub async fn save(&self, doc: Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).await.map(|_| ())
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// # Errors
    ///
    /// Returns `FailedToCreateOutput` if the temp file cannot be created in
    /// the destination directory and `FailedToWrite` if serialization,
    /// flushing or the final move fails. The temp file is removed on every
    /// failure path.
    pub async fn save_with_stats(
        &self,
        mut doc: Document,
        path: &Path,
    ) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        task::spawn_blocking(move || -> Result<WriteStatistics> {
            let start = Instant::now();

            if options.compress {
                doc.compress();
            }

            let temp = write_document(&mut doc, &path_buf, options.buffer_size)?;
            temp.persist(&path_buf)
                .map_err(|e| PdfPropError::FailedToWrite {
                    path: path_buf.clone(),
                    source: e.error,
                })?;

            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok(WriteStatistics {
                write_time: start.elapsed(),
                file_size,
                output_path: path_buf,
                compressed: options.compress,
            })
        })
        .await
        .map_err(|e| PdfPropError::other(format!("Write task failed: {e}")))?
    }
}

/// Writer for text reports that refuses to replace existing files.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter;

impl ReportWriter {
    /// Create a new report writer.
    pub fn new() -> Self {
        Self
    }

    /// Create `path` and write `contents` into it.
    ///
    /// The file is opened with create-new semantics, so a file that appeared
    /// after the caller's pre-check still yields `OutputExists` and is left
    /// untouched.
    pub async fn write_new(&self, path: &Path, contents: &[u8]) -> Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => PdfPropError::output_exists(path.to_path_buf()),
                _ => PdfPropError::FailedToCreateOutput {
                    path: path.to_path_buf(),
                    source: e,
                },
            })?;

        let to_write_error = |e| PdfPropError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        };
        file.write_all(contents).await.map_err(to_write_error)?;
        file.flush().await.map_err(to_write_error)?;

        log::debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// Directory the temp file for `path` is created in.
fn destination_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Serialize `doc` into a fresh temp file beside `path`.
fn write_document(doc: &mut Document, path: &Path, buffer_size: usize) -> Result<NamedTempFile> {
    let to_write_error = |e| PdfPropError::FailedToWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut temp = NamedTempFile::new_in(destination_dir(path)).map_err(|e| {
        PdfPropError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let mut writer = BufWriter::with_capacity(buffer_size, temp.as_file_mut());
    doc.save_to(&mut writer)
        .map_err(|e| to_write_error(std::io::Error::other(e)))?;
    writer.flush().map_err(to_write_error)?;
    drop(writer);

    Ok(temp)
}
