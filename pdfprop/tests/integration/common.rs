//! Fixture helpers for the integration tests.
//!
//! Every fixture is generated with lopdf into a temporary directory, so the
//! tests need no files checked into the repository.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace that is removed when dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Path of `name` inside the workspace; the file is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a PDF with `pages` pages whose MediaBox widths are `width`,
    /// `width + 1`, and so on.
    pub fn pdf(&self, name: &str, pages: usize, width: i64) -> PathBuf {
        let path = self.path(name);
        PdfBuilder::new(pages, width).save(&path);
        path
    }
}

/// Builds small but structurally complete PDF documents.
pub struct PdfBuilder {
    doc: Document,
    pages: Vec<ObjectId>,
}

impl PdfBuilder {
    pub fn new(pages: usize, width: i64) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let page_ids: Vec<ObjectId> = (0..pages)
            .map(|i| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), (width + i as i64).into(), 792.into()],
                })
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids.iter().map(|&id| Object::Reference(id)).collect::<Vec<_>>(),
                "Count" => pages as i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self {
            doc,
            pages: page_ids,
        }
    }

    /// Set the document-information dictionary.
    pub fn info(mut self, info: Dictionary) -> Self {
        let info_id = self.doc.add_object(info);
        self.doc.trailer.set("Info", info_id);
        self
    }

    /// Attach an annotation to the zero-based `page`.
    pub fn annotation(mut self, page: usize, annotation: Dictionary) -> Self {
        let annot_id = self.doc.add_object(annotation);
        let page = self
            .doc
            .get_dictionary_mut(self.pages[page])
            .expect("page dictionary");
        let mut annots = page
            .get(b"Annots")
            .and_then(Object::as_array)
            .cloned()
            .unwrap_or_default();
        annots.push(Object::Reference(annot_id));
        page.set("Annots", annots);
        self
    }

    pub fn save(mut self, path: &Path) {
        self.doc.save(path).expect("save fixture");
    }
}

/// MediaBox widths of every page of the PDF at `path`, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("load output");
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).expect("page dictionary");
            let media_box = page
                .get(b"MediaBox")
                .and_then(Object::as_array)
                .expect("MediaBox");
            media_box[2].as_i64().expect("integer width")
        })
        .collect()
}
