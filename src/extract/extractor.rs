//! Sequential page extractor.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::backend::{PageSource, TextBackend};
use crate::detect::detect_version_from_path;
use crate::error::{Error, Result};
use crate::render::PageWriter;

use super::options::{ErrorMode, ExtractOptions};
use super::report::ExtractionReport;

type ProgressFn = Box<dyn Fn(u32, u32)>;

/// Writes a PDF's text, page by page, to an output file using one capability.
pub struct Extractor {
    backend: Arc<dyn TextBackend>,
    options: ExtractOptions,
    progress: Option<ProgressFn>,
}

impl Extractor {
    /// Create an extractor over a capability with default options.
    pub fn new(backend: Arc<dyn TextBackend>) -> Self {
        Self {
            backend,
            options: ExtractOptions::default(),
            progress: None,
        }
    }

    /// Set extract options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Call `f(page_number, page_count)` after each page is written.
    pub fn on_page<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, u32) + 'static,
    {
        self.progress = Some(Box::new(f));
        self
    }

    /// Name of the capability in use.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Extract `pdf_path` into `output_path`.
    ///
    /// The document is opened before the output is created, so a missing or
    /// invalid input never leaves an output file behind. The output is
    /// created or truncated.
    pub fn extract<P, Q>(&self, pdf_path: P, output_path: Q) -> Result<ExtractionReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let pdf_path = pdf_path.as_ref();
        let output_path = output_path.as_ref();

        let version =
            detect_version_from_path(pdf_path).map_err(|e| Error::document_open(pdf_path, e))?;
        log::debug!("{} is PDF {}", pdf_path.display(), version);

        let source = self.backend.open(pdf_path)?;
        let page_count = source.page_count();
        log::info!(
            "Opened {} with {} ({} pages)",
            pdf_path.display(),
            self.backend.name(),
            page_count
        );

        let file = File::create(output_path).map_err(|e| Error::output_write(output_path, e))?;
        let mut writer = PageWriter::new(BufWriter::new(file));

        let failed_pages = self.write_pages(source.as_ref(), &mut writer, output_path)?;

        writer
            .finish()
            .map_err(|e| Error::output_write(output_path, e))?;
        source.close();

        Ok(ExtractionReport {
            output_path: output_path.to_path_buf(),
            page_count,
            backend: self.backend.name().to_string(),
            failed_pages,
        })
    }

    /// Write the header and every page; return the pages that failed.
    fn write_pages<W: Write>(
        &self,
        source: &dyn PageSource,
        writer: &mut PageWriter<W>,
        output_path: &Path,
    ) -> Result<Vec<u32>> {
        let page_count = source.page_count();
        let mut failed_pages = Vec::new();

        writer
            .write_header(page_count)
            .map_err(|e| Error::output_write(output_path, e))?;

        for index in 0..page_count {
            let number = index + 1;
            let text = match source.page_text(index) {
                Ok(text) => text,
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Skipping text of page {}: {}", number, e);
                    failed_pages.push(number);
                    String::new()
                }
                Err(e) => return Err(e),
            };

            log::debug!("Page {}: {} bytes of text", number, text.len());
            writer
                .write_page(number, &text)
                .map_err(|e| Error::output_write(output_path, e))?;

            if let Some(ref progress) = self.progress {
                progress(number, page_count);
            }
        }

        Ok(failed_pages)
    }
}
