//! Page tree manipulation.
//!
//! Appending a document's pages to another document means moving leaf page
//! objects under a different `/Pages` node. Attributes a page inherits from
//! its old ancestors would be lost by that move, so they are copied onto the
//! page first.

use lopdf::{Document, Object, ObjectId};

use crate::error::{PdfPropError, Result};

/// Page attributes that may be inherited from ancestor `/Pages` nodes.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Upper bound on page tree depth when walking `/Parent` links.
const MAX_TREE_DEPTH: usize = 64;

/// Helper for page tree operations.
#[derive(Debug, Clone, Default)]
pub struct PageTree;

impl PageTree {
    /// Create a new page tree helper.
    pub fn new() -> Self {
        Self
    }

    /// Object id of the root `/Pages` node of `doc`.
    pub fn root_pages_id(&self, doc: &Document) -> Result<ObjectId> {
        let catalog = doc
            .catalog()
            .map_err(|e| PdfPropError::merge_failed(format!("Failed to get catalog: {e}")))?;

        catalog
            .get(b"Pages")
            .and_then(Object::as_reference)
            .map_err(|e| PdfPropError::merge_failed(format!("Failed to get pages reference: {e}")))
    }

    /// Copy inherited attributes from the page's ancestors onto the page.
    ///
    /// Attributes the page already defines win; for the rest, the nearest
    /// ancestor defining them wins.
    pub fn flatten_inherited(&self, doc: &mut Document, page_id: ObjectId) -> Result<()> {
        let page = doc.get_dictionary(page_id)?;
        let mut missing: Vec<&[u8]> = INHERITABLE_KEYS
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

        let mut inherited = Vec::new();
        for _ in 0..MAX_TREE_DEPTH {
            let Some(parent_id) = parent else { break };
            if missing.is_empty() {
                break;
            }

            let node = doc.get_dictionary(parent_id)?;
            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((key.to_vec(), value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }

        if inherited.is_empty() {
            return Ok(());
        }

        let page = doc.get_dictionary_mut(page_id)?;
        for (key, value) in inherited {
            page.set(key, value);
        }

        Ok(())
    }

    /// Attach `page_ids`, in order, as kids of the `/Pages` node `pages_id`.
    ///
    /// Each page's `/Parent` is pointed at `pages_id` and the node's
    /// `/Count` grows by the number of pages added.
    pub fn append_pages(
        &self,
        doc: &mut Document,
        pages_id: ObjectId,
        page_ids: &[ObjectId],
    ) -> Result<()> {
        for &page_id in page_ids {
            let page = doc
                .get_dictionary_mut(page_id)
                .map_err(|e| PdfPropError::merge_failed(format!("Failed to get page: {e}")))?;
            page.set("Parent", Object::Reference(pages_id));
        }

        let pages_obj = doc
            .get_object_mut(pages_id)
            .map_err(|e| PdfPropError::merge_failed(format!("Failed to get pages object: {e}")))?;

        let Object::Dictionary(dict) = pages_obj else {
            return Err(PdfPropError::merge_failed(
                "Pages object is not a dictionary",
            ));
        };

        match dict.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => {
                kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));
            }
            Ok(_) => return Err(PdfPropError::merge_failed("Kids is not an array")),
            Err(_) => {
                return Err(PdfPropError::merge_failed(
                    "Pages dictionary missing Kids array",
                ));
            }
        }

        let current_count = dict.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
        dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

        Ok(())
    }
}
