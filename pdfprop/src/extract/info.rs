//! Extracted document information.
//!
//! [`PdfInfo`] is built once per extraction and never modified afterwards.
//! Keys are stored as raw PDF names (no `/`); the report decides how to
//! display them.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::NameStyle;

/// A value read from a PDF dictionary, with references already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// PDF `null`, or a key the object did not define.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer number.
    Integer(i64),
    /// Real number.
    Real(f32),
    /// Decoded text string.
    Text(String),
    /// Name, without its `/`.
    Name(String),
    /// Array of values.
    Array(Vec<PropertyValue>),
    /// Nested dictionary.
    Dictionary(IndexMap<String, PropertyValue>),
    /// Reference left unresolved: nesting got too deep, or the object was already expanded.
    Reference {
        /// Object number.
        id: u32,
        /// Generation number.
        generation: u16,
    },
    /// Stream object; only its dictionary length is kept.
    Stream {
        /// Length of the stream content in bytes.
        length: usize,
    },
}

impl PropertyValue {
    /// Text of a text or name value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Name(text) => Some(text),
            _ => None,
        }
    }

    /// Render the value for a `key = value` report line.
    pub fn render(&self, style: NameStyle) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Real(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Name(name) => style.render(name),
            Self::Array(items) => {
                let items: Vec<String> = items.iter().map(|item| item.render(style)).collect();
                format!("[{}]", items.join(", "))
            }
            Self::Dictionary(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", style.render(key), value.render(style)))
                    .collect();
                format!("<<{}>>", entries.join(", "))
            }
            Self::Reference { id, generation } => format!("{id} {generation} R"),
            Self::Stream { .. } => "<stream>".to_string(),
        }
    }
}

/// Ordered document-information entries, in the order the document declares them.
pub type Properties = IndexMap<String, PropertyValue>;

/// One page annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// 1-based number of the page carrying the annotation.
    pub page: u32,

    /// `Type`, `Subtype`, `CreationDate`, and `Contents` for text annotations.
    pub entries: IndexMap<String, PropertyValue>,
}

impl Annotation {
    /// The annotation's subtype, if it has a textual one.
    pub fn subtype(&self) -> Option<&str> {
        self.entries.get("Subtype").and_then(PropertyValue::as_text)
    }
}

/// Everything extracted from one PDF file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfInfo {
    /// Path of the source document, as given.
    pub file_path: PathBuf,

    /// Document-information dictionary entries.
    pub properties: Properties,

    /// Page annotations in page order; empty when not requested.
    pub annotations: Vec<Annotation>,
}

impl PdfInfo {
    /// Bundle the extracted parts.
    pub fn new(file_path: impl AsRef<Path>, properties: Properties, annotations: Vec<Annotation>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            properties,
            annotations,
        }
    }

    /// Look up a document property by its bare name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}
