//! Error types for pdfprop.
//!
//! Every failure that can end a combine or extract run is a variant of
//! [`PdfPropError`]. Messages always name the offending path so the CLI can
//! print them verbatim.
//!
//! # Error Categories
//!
//! - **Input errors**: missing inputs, paths that are not files
//! - **Output errors**: output collisions, create/write failures
//! - **PDF errors**: load failures reported by lopdf
//! - **Configuration errors**: invalid argument combinations

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfprop operations.
pub type Result<T> = std::result::Result<T, PdfPropError>;

/// Main error type for pdfprop operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfPropError {
    /// Input file was not found.
    #[error("Input file not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// lopdf could not load the document.
    #[error("Failed to load PDF: {}\n  Reason: {source}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Error reported by lopdf.
        #[source]
        source: lopdf::Error,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// No files were provided for merging.
    #[error("No input files specified for merging")]
    NoFilesToMerge,

    /// Output file already exists.
    #[error(
        "Output file \"{}\" already exists.\n  Choose a different output path",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The page trees of the inputs could not be joined.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Error reported by lopdf while reading an already loaded document.
    #[error("PDF error: {source}")]
    Pdf {
        /// Underlying lopdf error.
        #[from]
        source: lopdf::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl PdfPropError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Classify a lopdf load failure for `path`.
    ///
    /// Encryption failures get their own variant so the user sees the
    /// decryption hint; everything else keeps lopdf's error as the source.
    pub fn load_failed(path: PathBuf, source: lopdf::Error) -> Self {
        let message = source.to_string().to_lowercase();
        if message.contains("encrypt") || message.contains("password") {
            Self::EncryptedPdf { path }
        } else {
            Self::FailedToLoadPdf { path, source }
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::NoFilesToMerge => 1,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::MergeFailed { .. } => 6,
            Self::InvalidConfig { .. } => 1,
            Self::Pdf { .. } => 3,
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}
