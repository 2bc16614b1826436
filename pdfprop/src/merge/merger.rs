//! Core PDF concatenation.
//!
//! The first input is the base document; every following input is
//! renumbered past the base's object ids, its objects are moved in, and its
//! pages are appended to the base's root page tree in order.

use lopdf::{Document, ObjectId};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::MergeConfig;
use crate::error::{PdfPropError, Result};
use crate::io::PdfReader;
use crate::merge::pages::PageTree;
use crate::utils::format_file_size;
use crate::validation::Validator;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for merge.
    pub merge_time: Duration,

    /// Time taken to load all PDFs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged, in merge order.
    pub merged_files: Vec<PathBuf>,
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    validator: Validator,
    reader: PdfReader,
    page_tree: PageTree,
}

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check, load and merge the inputs named by `config`.
    ///
    /// All inputs are checked for existence, in order, before the first one
    /// is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input is missing or not a file (the first such path is named)
    /// - lopdf cannot load an input
    /// - An input's page tree cannot be joined
    pub async fn merge(&self, config: &MergeConfig) -> Result<MergeResult> {
        let merge_start = Instant::now();

        self.validator.check_inputs(&config.inputs).await?;

        let load_start = Instant::now();
        let loaded = self.reader.load_sequential(&config.inputs).await?;
        let load_time = load_start.elapsed();

        let input_size = loaded.iter().map(|pdf| pdf.file_size).sum();
        let mut merged_files = Vec::with_capacity(loaded.len());
        let mut documents = Vec::with_capacity(loaded.len());
        for pdf in loaded {
            merged_files.push(pdf.path);
            documents.push(pdf.document);
        }

        let document = self.merge_documents(documents)?;

        let statistics = MergeStatistics {
            files_merged: merged_files.len(),
            total_pages: document.get_pages().len(),
            merge_time: merge_start.elapsed(),
            load_time,
            input_size,
        };

        Ok(MergeResult {
            document,
            statistics,
            merged_files,
        })
    }

    /// Concatenate already loaded documents, in order.
    pub fn merge_documents(&self, documents: Vec<Document>) -> Result<Document> {
        let mut documents = documents.into_iter();
        let mut merged = documents.next().ok_or(PdfPropError::NoFilesToMerge)?;

        let pages_id = self.page_tree.root_pages_id(&merged)?;

        for mut doc in documents {
            doc.renumber_objects_with(merged.max_id + 1);

            let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
            for &page_id in &page_ids {
                self.page_tree.flatten_inherited(&mut doc, page_id)?;
            }

            merged.max_id = merged.max_id.max(doc.max_id);
            merged.objects.extend(doc.objects);

            self.page_tree
                .append_pages(&mut merged, pages_id, &page_ids)?;
            log::debug!("appended {} pages", page_ids.len());
        }

        // Catalogs and page tree nodes of appended documents are now orphans.
        merged.prune_objects();
        merged.renumber_objects();

        Ok(merged)
    }
}
