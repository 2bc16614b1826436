//! Report rendering.
//!
//! The text layout is line-oriented:
//!
//! ```text
//! PDF_file_path = <path>
//!
//! property_num: <N>
//! <key> = <value>
//!
//! annotation_num: <M>
//!
//! Annotation 1:
//! <key> = <value>
//! ```
//!
//! Both count lines always match the number of blocks that follow them.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::config::{NameStyle, ReportFormat};
use crate::error::{PdfPropError, Result};
use crate::extract::info::{PdfInfo, PropertyValue};

/// Render `info` in the requested format.
pub fn render(info: &PdfInfo, format: ReportFormat, style: NameStyle) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(info, style)),
        ReportFormat::Json => render_json(info),
    }
}

/// Render the plain-text report.
pub fn render_text(info: &PdfInfo, style: NameStyle) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "PDF_file_path = {}", info.file_path.display());
    out.push('\n');

    let _ = writeln!(out, "property_num: {}", info.properties.len());
    write_entries(&mut out, &info.properties, style);
    out.push('\n');

    let _ = writeln!(out, "annotation_num: {}", info.annotations.len());
    for (index, annotation) in info.annotations.iter().enumerate() {
        let _ = write!(out, "\nAnnotation {}:\n", index + 1);
        write_entries(&mut out, &annotation.entries, style);
    }

    out
}

/// Render the report as pretty-printed JSON with bare key names.
pub fn render_json(info: &PdfInfo) -> Result<String> {
    let mut json = serde_json::to_string_pretty(info)
        .map_err(|e| PdfPropError::other(format!("Failed to serialize report: {e}")))?;
    json.push('\n');
    Ok(json)
}

fn write_entries(out: &mut String, entries: &IndexMap<String, PropertyValue>, style: NameStyle) {
    for (key, value) in entries {
        let _ = writeln!(out, "{} = {}", style.render(key), value.render(style));
    }
}
