//! PDF loading.
//!
//! Documents are parsed by lopdf on a blocking task. The file handle is
//! opened and released inside that task, so it never outlives the load,
//! whether parsing succeeds or fails.
//!
//! # Examples
//!
//! ```no_run
//! use pdfprop::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{PdfPropError, Result};

/// A loaded PDF document with load details.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// PDF reader.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns `EncryptedPdf` for documents lopdf refuses as encrypted and
    /// `FailedToLoadPdf` (carrying lopdf's error) for anything else lopdf
    /// cannot read.
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let loaded = task::spawn_blocking(move || {
            let start = Instant::now();
            let document = Document::load(&path_buf)
                .map_err(|e| PdfPropError::load_failed(path_buf.clone(), e))?;
            Ok::<_, PdfPropError>(LoadedPdf::new(document, path_buf, start.elapsed()))
        })
        .await
        .map_err(|e| PdfPropError::other(format!("Load task failed: {e}")))??;

        log::debug!(
            "loaded {} ({} pages) in {:?}",
            loaded.path.display(),
            loaded.page_count,
            loaded.load_time
        );

        Ok(loaded)
    }

    /// Load several documents one after another, in the order given.
    ///
    /// Stops at the first failure.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Result<Vec<LoadedPdf>> {
        let mut loaded = Vec::with_capacity(paths.len());

        for path in paths {
            loaded.push(self.load(path).await?);
        }

        Ok(loaded)
    }
}
