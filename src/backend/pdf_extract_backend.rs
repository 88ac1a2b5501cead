//! Fallback capability backed by `pdf-extract`.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use pdf_extract::{Document, PlainTextOutput};

use super::{PageSource, TextBackend};
use crate::error::{Error, Result};

/// [`TextBackend`] that renders one page at a time with
/// `pdf_extract::output_doc_page`.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractBackend {
    _private: (),
}

impl PdfExtractBackend {
    /// Create a new pdf-extract capability.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>> {
        let data = std::fs::read(path).map_err(|e| Error::document_open(path, e))?;

        let doc = catch_unwind(AssertUnwindSafe(|| Document::load_mem(&data)))
            .map_err(|_| Error::document_open(path, "pdf-extract panicked while loading"))?
            .map_err(|e| Error::document_open(path, e))?;

        if doc.is_encrypted() {
            log::warn!("{} is encrypted; page text may be empty", path.display());
        }

        Ok(Box::new(PdfExtractPages::new(doc)))
    }
}

/// An open document; pages are extracted on demand.
struct PdfExtractPages {
    doc: Document,
    page_numbers: Vec<u32>,
}

impl PdfExtractPages {
    fn new(doc: Document) -> Self {
        let page_numbers = doc.get_pages().keys().copied().collect();
        Self { doc, page_numbers }
    }
}

impl PageSource for PdfExtractPages {
    fn page_count(&self) -> u32 {
        self.page_numbers.len() as u32
    }

    fn page_text(&self, index: u32) -> Result<String> {
        let page_number = *self
            .page_numbers
            .get(index as usize)
            .ok_or(Error::PageOutOfRange(index, self.page_count()))?;

        let mut text = String::new();
        // pdf-extract panics on some malformed pages (e.g. a missing MediaBox).
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(&self.doc, &mut output, page_number)
        }));

        match result {
            Ok(Ok(())) => Ok(text),
            Ok(Err(e)) => Err(Error::PageExtraction {
                page: index + 1,
                reason: e.to_string(),
            }),
            Err(_) => Err(Error::PageExtraction {
                page: index + 1,
                reason: "pdf-extract panicked".to_string(),
            }),
        }
    }
}
