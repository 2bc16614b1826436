//! Document property extraction.
//!
//! Reads the document-information dictionary, and optionally every page's
//! annotations, into a [`PdfInfo`] and writes it out as a report.
//!
//! # Examples
//!
//! ```no_run
//! use pdfprop::config::ExtractConfig;
//! use pdfprop::extract::extract;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractConfig::new("paper.pdf", "paper.txt", true);
//! let info = extract(&config).await?;
//! println!("{} properties", info.properties.len());
//! # Ok(())
//! # }
//! ```

pub mod info;
pub mod reader;
pub mod report;

pub use info::{Annotation, PdfInfo, Properties, PropertyValue};
pub use reader::PropertyReader;
pub use report::{render, render_json, render_text};

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::io::ReportWriter;
use crate::output::{OutputFormatter, display_extract_summary};
use crate::validation::Validator;

/// Extract the properties of `config.input` into a new report at `config.output`.
///
/// The output is checked before the input is touched; nothing is written
/// unless reading succeeded.
///
/// # Errors
///
/// Returns `OutputExists` if the report path is taken, `FileNotFound` if the
/// input is missing, and propagates load and write failures.
pub async fn extract(config: &ExtractConfig) -> Result<PdfInfo> {
    config.validate()?;

    let validator = Validator::new();
    validator.check_output_absent(&config.output).await?;
    validator.check_input(&config.input).await?;

    let info = PropertyReader::new()
        .read(&config.input, config.include_annotations)
        .await?;

    let report = render(&info, config.format, config.name_style)?;
    ReportWriter::new()
        .write_new(&config.output, report.as_bytes())
        .await?;

    let formatter = OutputFormatter::from(config);
    display_extract_summary(&formatter, &info);
    log::info!(
        "extracted {} properties and {} annotations from {} into {}",
        info.properties.len(),
        info.annotations.len(),
        config.input.display(),
        config.output.display()
    );

    Ok(info)
}
