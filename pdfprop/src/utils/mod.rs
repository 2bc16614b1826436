//! Small helpers shared by the merge and extract paths.

use lopdf::{Document, Object};

use crate::error::Result;

/// Longest reference chain followed before giving up.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Follow `obj` through indirect references until a direct object is found.
///
/// Chains longer than [`MAX_REFERENCE_DEPTH`] (cycles, in practice) resolve
/// to the last reference reached.
///
/// # Errors
///
/// Propagates lopdf's error when a reference points at a missing object.
pub fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    let mut current = obj;
    for _ in 0..MAX_REFERENCE_DEPTH {
        match current {
            Object::Reference(id) => {
                current = doc.get_object(*id)?;
            }
            _ => return Ok(current),
        }
    }
    Ok(current)
}

/// Decode a PDF text string.
///
/// Handles the UTF-16BE and UTF-8 byte order marks; anything else is read as
/// UTF-8 when valid and byte-per-char (Latin-1, close to PDFDocEncoding for
/// printable text) otherwise.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units = utf16
            .chunks(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]));
        return char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Format a byte count as a human-readable size.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
