//! pdfprop - Combine PDF files and extract their document properties.
//!
//! This library provides two operations built on lopdf:
//!
//! - [`combine`]: concatenate several PDF files, in order, into one document
//! - [`extract`]: read the document-information dictionary, and optionally
//!   every page's annotations, into a text or JSON report
//!
//! # Examples
//!
//! ## Combine
//!
//! ```no_run
//! use pdfprop::config::MergeConfig;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MergeConfig::new(
//!     "merged.pdf",
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//! );
//! let summary = pdfprop::combine(&config).await?;
//! println!("Created {} page document", summary.merge.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Extract
//!
//! ```no_run
//! use pdfprop::config::{ExtractConfig, NameStyle};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = ExtractConfig::new("paper.pdf", "paper.txt", true);
//! config.name_style = NameStyle::Prefixed;
//!
//! let info = pdfprop::extract(&config).await?;
//! if let Some(title) = info.property("Title") {
//!     println!("Title: {}", title.render(config.name_style));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfprop::extract::{PropertyReader, render_text};
//! use pdfprop::config::NameStyle;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let info = PropertyReader::new().read(Path::new("paper.pdf"), false).await?;
//! print!("{}", render_text(&info, NameStyle::Bare));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{ExtractConfig, MergeConfig};
pub use error::{PdfPropError, Result};
pub use extract::{PdfInfo, extract};
pub use merge::{CombineSummary, combine};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
