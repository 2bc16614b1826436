//! I/O operations for pdfprop.
//!
//! This module handles all file I/O:
//! - Loading PDF documents from disk
//! - Writing merged PDFs atomically
//! - Creating text reports without clobbering existing files
//!
//! # Examples
//!
//! ```no_run
//! use pdfprop::io::{PdfReader, PdfWriter};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(&PathBuf::from("input.pdf")).await?;
//!
//! let writer = PdfWriter::new();
//! writer.save(loaded.document, &PathBuf::from("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, ReportWriter, WriteOptions, WriteStatistics};
