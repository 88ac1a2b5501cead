//! # pagetext
//!
//! Writes the text of a PDF, page by page, to a plain text file:
//!
//! ```text
//! Total pages: 3
//!
//! ================================================================================
//! PAGE 1
//! ================================================================================
//!
//! <text of page 1>
//! ...
//! ```
//!
//! Text extraction is delegated to a *capability* (a PDF library). `lopdf`
//! is tried first and `pdf-extract` is the fallback; both are cargo features.
//! When neither is compiled in, [`Pagetext::extract_or_install`] installs the
//! primary one and asks for a re-run.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pagetext::Result<()> {
//!     let report = pagetext::extract("document.pdf", "pdf_content.txt")?;
//!     println!("{} pages written to {}", report.page_count, report.output_path.display());
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod detect;
pub mod error;
pub mod extract;
pub mod install;
pub mod render;

pub use backend::{BackendInfo, BackendRegistry, PageSource, TextBackend};
pub use error::{Error, Result};
pub use extract::{ErrorMode, ExtractOptions, ExtractionReport, Extractor, PageCount};
pub use install::{CargoInstaller, Installer};

use std::path::Path;

/// Extract `pdf_path` into `output_path` with the first available capability.
///
/// # Example
///
/// ```no_run
/// let report = pagetext::extract("document.pdf", "out.txt").unwrap();
/// assert!(report.is_complete());
/// ```
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    pdf_path: P,
    output_path: Q,
) -> Result<ExtractionReport> {
    Pagetext::new().extract(pdf_path, output_path)
}

/// How a run of [`Pagetext::extract_or_install`] ended.
#[derive(Debug)]
pub enum Outcome {
    /// Text was written.
    Extracted(ExtractionReport),
    /// No capability was available; one was installed and the program must
    /// be run again.
    Installed,
}

/// Builder for an extraction run.
///
/// # Example
///
/// ```no_run
/// use pagetext::Pagetext;
///
/// let report = Pagetext::new()
///     .with_backend("pdf-extract")
///     .strict()
///     .extract("document.pdf", "out.txt")?;
/// # Ok::<(), pagetext::Error>(())
/// ```
pub struct Pagetext {
    registry: BackendRegistry,
    backend: Option<String>,
    options: ExtractOptions,
    progress: Option<Box<dyn Fn(u32, u32)>>,
}

impl Pagetext {
    /// Create a builder over the compiled-in capabilities.
    pub fn new() -> Self {
        Self::with_registry(BackendRegistry::with_defaults())
    }

    /// Create a builder over a custom registry.
    pub fn with_registry(registry: BackendRegistry) -> Self {
        Self {
            registry,
            backend: None,
            options: ExtractOptions::default(),
            progress: None,
        }
    }

    /// Force a capability by name instead of probing.
    pub fn with_backend(mut self, name: impl Into<String>) -> Self {
        self.backend = Some(name.into());
        self
    }

    /// Set extract options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Abort on the first page whose text cannot be extracted.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
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

    /// Registered capabilities and their availability.
    pub fn backends(&self) -> Vec<BackendInfo> {
        self.registry.info()
    }

    /// Select a capability and build the extractor.
    pub fn extractor(self) -> Result<Extractor> {
        let backend = match self.backend {
            Some(ref name) => self.registry.get_by_name(name)?,
            None => self.registry.select()?,
        };

        let mut extractor = Extractor::new(backend).with_options(self.options);
        if let Some(progress) = self.progress {
            extractor = extractor.on_page(progress);
        }
        Ok(extractor)
    }

    /// Extract `pdf_path` into `output_path`.
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        pdf_path: P,
        output_path: Q,
    ) -> Result<ExtractionReport> {
        self.extractor()?.extract(pdf_path, output_path)
    }

    /// Extract, or install the primary capability if none is available.
    ///
    /// The install path never touches the filesystem beyond what the
    /// installer itself does; the caller must run again to extract.
    pub fn extract_or_install<I, P, Q>(
        self,
        installer: &I,
        pdf_path: P,
        output_path: Q,
    ) -> Result<Outcome>
    where
        I: Installer + ?Sized,
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        match self.extractor() {
            Ok(extractor) => extractor
                .extract(pdf_path, output_path)
                .map(Outcome::Extracted),
            Err(e) if e.needs_install() => {
                log::warn!("{}; installing with {}", e, installer.description());
                installer.install()?;
                Ok(Outcome::Installed)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for Pagetext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_strict() {
        let builder = Pagetext::new().strict();
        assert_eq!(builder.options.error_mode, ErrorMode::Strict);
    }

    #[test]
    fn test_builder_default_lenient() {
        let builder = Pagetext::default();
        assert_eq!(builder.options.error_mode, ErrorMode::Lenient);
        assert!(builder.backend.is_none());
    }

    #[test]
    fn test_builder_with_backend() {
        let builder = Pagetext::new().with_backend("lopdf");
        assert_eq!(builder.backend.as_deref(), Some("lopdf"));
    }

    #[test]
    fn test_empty_registry_has_no_extractor() {
        let result = Pagetext::with_registry(BackendRegistry::new()).extractor();
        assert!(matches!(result, Err(Error::CapabilityUnavailable)));
    }

    #[test]
    fn test_unknown_backend_name() {
        let result = Pagetext::new().with_backend("mupdf").extractor();
        assert!(matches!(result, Err(Error::UnknownCapability(_))));
    }
}
