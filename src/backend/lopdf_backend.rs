//! Primary capability backed by `lopdf`.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use super::{PageSource, TextBackend};
use crate::error::{Error, Result};

/// [`TextBackend`] that loads documents with `lopdf::Document`.
#[derive(Debug, Clone, Default)]
pub struct LopdfBackend {
    _private: (),
}

impl LopdfBackend {
    /// Create a new lopdf capability.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextBackend for LopdfBackend {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>> {
        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::document_open(path, "document is encrypted"),
            _ => Error::document_open(path, e),
        })?;

        if doc.is_encrypted() {
            log::warn!("{} is encrypted; page text may be empty", path.display());
        }

        Ok(Box::new(LopdfPages::new(doc)))
    }
}

/// An open lopdf document.
struct LopdfPages {
    doc: LopdfDocument,
    /// Page numbers as lopdf numbers them, in page-tree order.
    page_numbers: Vec<u32>,
}

impl LopdfPages {
    fn new(doc: LopdfDocument) -> Self {
        let page_numbers = doc.get_pages().keys().copied().collect();
        Self { doc, page_numbers }
    }
}

impl PageSource for LopdfPages {
    fn page_count(&self) -> u32 {
        self.page_numbers.len() as u32
    }

    fn page_text(&self, index: u32) -> Result<String> {
        let page_number = *self
            .page_numbers
            .get(index as usize)
            .ok_or(Error::PageOutOfRange(index, self.page_count()))?;

        self.doc
            .extract_text(&[page_number])
            .map_err(|e| Error::PageExtraction {
                page: index + 1,
                reason: e.to_string(),
            })
    }
}
