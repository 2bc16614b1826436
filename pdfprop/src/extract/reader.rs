//! Reading document information and annotations out of a loaded document.

use indexmap::IndexMap;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::extract::info::{Annotation, PdfInfo, Properties, PropertyValue};
use crate::io::PdfReader;
use crate::utils::{decode_text_string, resolve};

/// Keys read from every annotation, in report order.
const ANNOTATION_KEYS: [&str; 3] = ["Type", "Subtype", "CreationDate"];

/// Key read additionally from annotations with a textual subtype.
const CONTENTS_KEY: &str = "Contents";

/// Nesting depth up to which references inside values are resolved.
const MAX_VALUE_DEPTH: usize = 8;

/// Reads document properties and annotations.
#[derive(Debug, Clone, Default)]
pub struct PropertyReader {
    reader: PdfReader,
}

impl PropertyReader {
    /// Create a new property reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and collect its properties, plus annotations if asked.
    ///
    /// The document is dropped before this returns; only the extracted
    /// values are kept.
    pub async fn read(&self, path: &Path, include_annotations: bool) -> Result<PdfInfo> {
        let loaded = self.reader.load(path).await?;
        let doc = &loaded.document;

        let properties = self.read_properties(doc)?;
        let annotations = if include_annotations {
            self.read_annotations(doc)?
        } else {
            Vec::new()
        };

        log::debug!(
            "{}: {} properties, {} annotations",
            path.display(),
            properties.len(),
            annotations.len()
        );

        Ok(PdfInfo::new(path, properties, annotations))
    }

    /// Entries of the trailer's `Info` dictionary, in declaration order.
    ///
    /// A document without an `Info` entry yields no properties.
    pub fn read_properties(&self, doc: &Document) -> Result<Properties> {
        let Ok(info) = doc.trailer.get(b"Info") else {
            return Ok(Properties::new());
        };

        let owner = info.as_reference().ok();
        let info = resolve(doc, info)?.as_dict()?;
        Ok(dictionary_entries(doc, info, owner))
    }

    /// Annotations of every page, in page order.
    ///
    /// Pages without `Annots` contribute nothing. Entries that do not resolve
    /// to a dictionary are skipped.
    pub fn read_annotations(&self, doc: &Document) -> Result<Vec<Annotation>> {
        let mut annotations = Vec::new();

        for (page_number, page_id) in doc.get_pages() {
            let page = doc.get_dictionary(page_id)?;
            let Ok(annots) = page.get(b"Annots") else {
                continue;
            };

            for entry in resolve(doc, annots)?.as_array()? {
                match resolve(doc, entry)? {
                    Object::Dictionary(dict) => {
                        let owner = entry.as_reference().ok();
                        annotations.push(read_annotation(doc, dict, owner, page_number));
                    }
                    other => {
                        log::warn!(
                            "page {page_number}: skipping annotation entry of type {}",
                            other.enum_variant()
                        );
                    }
                }
            }
        }

        Ok(annotations)
    }
}

fn read_annotation(
    doc: &Document,
    dict: &Dictionary,
    owner: Option<ObjectId>,
    page: u32,
) -> Annotation {
    let mut entries: IndexMap<String, PropertyValue> = ANNOTATION_KEYS
        .iter()
        .map(|&key| (key.to_string(), lookup(doc, dict, owner, key)))
        .collect();

    let textual = entries
        .get("Subtype")
        .and_then(PropertyValue::as_text)
        .is_some_and(|subtype| subtype.to_lowercase().contains("text"));
    if textual {
        entries.insert(
            CONTENTS_KEY.to_string(),
            lookup(doc, dict, owner, CONTENTS_KEY),
        );
    }

    Annotation { page, entries }
}

fn lookup(doc: &Document, dict: &Dictionary, owner: Option<ObjectId>, key: &str) -> PropertyValue {
    dict.get(key.as_bytes())
        .map(|obj| top_level_value(doc, obj, owner))
        .unwrap_or(PropertyValue::Null)
}

/// Top-level entries of `dict`, which was resolved from object `owner`.
fn dictionary_entries(doc: &Document, dict: &Dictionary, owner: Option<ObjectId>) -> Properties {
    dict.iter()
        .map(|(key, value)| {
            (
                String::from_utf8_lossy(key).into_owned(),
                top_level_value(doc, value, owner),
            )
        })
        .collect()
}

fn top_level_value(doc: &Document, obj: &Object, owner: Option<ObjectId>) -> PropertyValue {
    let mut visited: HashSet<ObjectId> = owner.into_iter().collect();
    to_value(doc, obj, 0, &mut visited)
}

/// Convert a lopdf object into a [`PropertyValue`], resolving references.
///
/// Each object is expanded at most once per top-level value; later
/// references to it stay references.
fn to_value(
    doc: &Document,
    obj: &Object,
    depth: usize,
    visited: &mut HashSet<ObjectId>,
) -> PropertyValue {
    match obj {
        Object::Reference(id) if depth >= MAX_VALUE_DEPTH || !visited.insert(*id) => {
            PropertyValue::Reference {
                id: id.0,
                generation: id.1,
            }
        }
        Object::Reference(_) => match resolve(doc, obj) {
            Ok(target) => to_value(doc, target, depth + 1, visited),
            Err(err) => {
                log::debug!("unresolvable reference: {err}");
                PropertyValue::Null
            }
        },
        Object::Null => PropertyValue::Null,
        Object::Boolean(value) => PropertyValue::Bool(*value),
        Object::Integer(value) => PropertyValue::Integer(*value),
        Object::Real(value) => PropertyValue::Real(*value),
        Object::String(bytes, _) => PropertyValue::Text(decode_text_string(bytes)),
        Object::Name(name) => PropertyValue::Name(String::from_utf8_lossy(name).into_owned()),
        Object::Array(items) => PropertyValue::Array(
            items
                .iter()
                .map(|item| to_value(doc, item, depth + 1, visited))
                .collect(),
        ),
        Object::Dictionary(dict) => PropertyValue::Dictionary(
            dict.iter()
                .map(|(key, value)| {
                    (
                        String::from_utf8_lossy(key).into_owned(),
                        to_value(doc, value, depth + 1, visited),
                    )
                })
                .collect(),
        ),
        Object::Stream(stream) => PropertyValue::Stream {
            length: stream.content.len(),
        },
    }
}
